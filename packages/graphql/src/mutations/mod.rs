use async_graphql::MergedObject;
mod dashboard;
mod forms;
mod sign_in;

pub use forms::FormMutationResult;
pub use sign_in::{SignInInput, SignInResult, SignedIn};

#[derive(MergedObject, Default)]
pub struct Mutations(
    forms::FormMutation,
    sign_in::SignInMutation,
    dashboard::DashboardMutation,
);
