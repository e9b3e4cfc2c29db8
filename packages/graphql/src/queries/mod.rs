use async_graphql::MergedObject;
mod dashboard;
mod forms;

#[derive(MergedObject, Default)]
pub struct Queries(forms::FormQueries, dashboard::DashboardQueries);
