use course_sched::config::AppConfig;
use course_sched::server;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    server::run_server(config).await;
}
