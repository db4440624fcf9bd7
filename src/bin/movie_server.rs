use catalog_graphql::graphql::Movies;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_graphql::server::run::<Movies>().await
}
