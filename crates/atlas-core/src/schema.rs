//! DDL for the `persons` table

/// Statements that create the table and its lookup indexes when missing.
///
/// `id_column` is the engine's spelling of a never-reused auto-incrementing
/// primary key. The statements are meant to run inside one transaction.
pub fn schema_statements(id_column: &str) -> [String; 3] {
    [
        format!(
            "CREATE TABLE IF NOT EXISTS persons (\
             id {id_column}, \
             name TEXT, \
             surname TEXT, \
             alias TEXT, \
             phone TEXT, \
             \"group\" TEXT)"
        ),
        "CREATE INDEX IF NOT EXISTS idx_persons_phone ON persons (phone)".to_string(),
        "CREATE INDEX IF NOT EXISTS idx_persons_alias ON persons (alias)".to_string(),
    ]
}
