use crate::{
    error::{AppError, Result},
    utils::jwt::Claims,
};

pub fn extract_user_id(claims: &Claims) -> Result<i32> {
    claims
        .sub
        .parse::<i32>()
        .map_err(|_| AppError::Unauthorized("Unauthorized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::extract_user_id;
    use crate::{models::UserRole, utils::jwt::Claims};

    fn claims(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            email: "ana@example.com".to_string(),
            name: "Ana".to_string(),
            role: UserRole::User,
            exp: 0,
        }
    }

    #[test]
    fn numeric_subject_parses() {
        assert_eq!(extract_user_id(&claims("17")).unwrap(), 17);
    }

    #[test]
    fn non_numeric_subject_is_unauthorized() {
        assert!(extract_user_id(&claims("abc")).is_err());
    }
}
