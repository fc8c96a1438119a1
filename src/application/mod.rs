//! Application layer with use cases, DTOs, and the distribution workflow.

/// Data transfer objects.
pub mod dto;
/// Use case implementations.
pub mod use_cases;
/// Distribution workflow state machine.
pub mod workflow;

pub use dto::{LoginOutcome, LoginRequest, RegisterRequest, SessionSource};
pub use use_cases::{LoginUseCase, RegisterUseCase, ResolveSessionUseCase, ResolvedSession};
pub use workflow::{DistributionWorkflow, WorkflowState};
