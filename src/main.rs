#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    revenue_pulse::utils::init_tracing();
    revenue_pulse::cli::run().await;
}
