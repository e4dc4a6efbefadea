//! Orchestration services for the support workflow.

mod desk;

pub use desk::{
    DashboardPage, SubmitMessageRequest, SupportDeskError, SupportDeskResult, SupportDeskService,
};
