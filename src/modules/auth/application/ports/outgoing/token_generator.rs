/// Source of fresh opaque token strings.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}
