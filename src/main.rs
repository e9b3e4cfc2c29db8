mod setup;

use actix_cors::Cors;
use actix_web::{guard, web, App, HttpResponse, HttpServer};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use graphql::PortalSchema;
use tracing_actix_web::TracingLogger;

async fn index() -> &'static str {
    "Hello, HealthFirst!"
}

async fn graphql_playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn graphql_request(
    schema: web::Data<PortalSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = setup::load_config().map_err(std::io::Error::other)?;
    setup::init_tracing(config.log_format);

    let schema = setup::set_up_schema(&config);
    let (host, port) = config.bind_address();
    tracing::info!(%host, port, "starting server");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(schema.clone()))
            .route("/", web::get().to(index))
            .service(
                web::resource("/graphql")
                    .guard(guard::Post())
                    .to(graphql_request),
            )
            .route("/graphql", web::get().to(graphql_playground))
    })
    .bind((host, port))?
    .run()
    .await
}
