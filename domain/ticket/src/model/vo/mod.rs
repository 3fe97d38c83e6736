mod action;
mod claim;
mod context;
mod effect;
mod results;
mod subject;

#[rustfmt::skip]
pub use {
    action::{Action, ActionKind, Actor},
    claim::NewClaim,
    context::{Assignee, CascadePolicy, ClaimRef, Transition, TransitionContext},
    effect::Effect,
    results::WorkResults,
    subject::{Subject, SubjectKind},
};
