#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Cast to {expected} failed for value {value} at path \"{field}\"")]
    Cast {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}
