use catalog_graphql::graphql::Books;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_graphql::server::run::<Books>().await
}
