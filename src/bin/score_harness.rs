use smartscreener::core::models::EngineSettings;
use smartscreener::core::service::ScreenerService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: score_harness <path-to-resume.pdf|txt> <path-to-jd.txt> [job-title]");
        std::process::exit(1);
    }

    let resume_path = &args[1];
    let jd_text = tokio::fs::read_to_string(&args[2]).await?;
    let job_title = args.get(3).map(String::as_str).unwrap_or("Untitled Role");

    let service = ScreenerService::new(EngineSettings::default());
    let result = match service.score_resume(resume_path, job_title, &jd_text).await {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Error while scoring resume: {err}");
            std::process::exit(if err.is_caller_error() { 2 } else { 3 });
        }
    };

    println!("Score: {:.4}", result.score);
    for entry in &result.top_overlap {
        println!(
            "{}   (r={:.3}, jd={:.3})",
            entry.term, entry.resume_tf_idf, entry.jd_tf_idf
        );
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
