use async_graphql::*;
use graphql::mutations::Mutations as MutationRoot;
use graphql::queries::Queries as QueryRoot;

fn main() -> std::io::Result<()> {
    let schema = Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription).finish();
    // Print the schema in SDL format
    println!("{}", &schema.sdl());
    Ok(())
}
