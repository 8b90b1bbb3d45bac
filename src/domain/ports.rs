/// Source of the invocation arguments the CLI path needs.
pub trait ConfigProvider {
    /// Element 0 of the argument sequence, as it should appear in the usage line.
    fn program(&self) -> &str;
    /// Element 1 of the argument sequence, if one was supplied.
    fn name(&self) -> Option<&str>;
}
