/// Schema metadata for PostgreSQL tables.
///
/// All methods return `&'static str` so that DDL can be assembled at
/// compile time with `const_format::concatcp!`. This trait contains no
/// I/O; [`create`](crate::create) executes it.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}
