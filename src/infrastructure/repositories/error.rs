use crate::domain::errors::DomainError;

const CNT_ARTICLE_TITLE_OBJECT: &str = "articles_title_is_object_chk";
const CNT_ARTICLE_CONTENT_OBJECT: &str = "articles_content_is_object_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("article not found".into()),
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_TITLE_OBJECT => {
                        DomainError::Persistence("stored title must be a JSON object".into())
                    }
                    CNT_ARTICLE_CONTENT_OBJECT => {
                        DomainError::Persistence("stored content must be a JSON object".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::NotFound(_)
        ));
    }

    #[test]
    fn other_errors_map_to_persistence() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(_)
        ));
    }
}
