#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    korean_support_advisor::run().await
}
