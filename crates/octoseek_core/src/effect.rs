#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ArmDebounce { token: crate::DebounceToken },
    IssueSearch { request: crate::RequestId, query: String },
    CancelSearch { request: crate::RequestId },
}
