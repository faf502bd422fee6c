use surrealdb::sql::Thing;

use crate::middleware::error::{AppError, AppResult};

pub fn get_str_thing(value: &str) -> AppResult<Thing> {
    Thing::try_from(value).map_err(|_| AppError::Generic {
        description: "error into Thing".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::get_str_thing;

    #[test]
    fn parses_record_ids() {
        let thing = get_str_thing("posts:abc123").unwrap();
        assert_eq!(thing.tb, "posts");
        assert_eq!(thing.id.to_raw(), "abc123");
    }

    #[test]
    fn rejects_plain_strings() {
        assert!(get_str_thing("not a record id").is_err());
    }
}
