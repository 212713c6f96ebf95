use codewars_leaderboard_module::codewarsclient::CodewarsReqwestClient;
use codewars_leaderboard_module::leaderboard::{self, OVERALL_CATEGORY};
use codewars_leaderboard_module::userfetcher;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let raw_usernames = args.next().ok_or(anyhow::anyhow!(
        "usage: leaderboard <comma-separated-usernames> [category]"
    ))?;
    let category = args.next().unwrap_or_else(|| OVERALL_CATEGORY.to_string());

    let usernames = userfetcher::extract_usernames(&raw_usernames);
    if usernames.is_empty() {
        return Ok(());
    }

    let client = CodewarsReqwestClient::new();
    let batch = userfetcher::fetch_users(&client, &usernames).await;

    if batch.all_failed() {
        println!("No users found");
        return Ok(());
    }

    if !batch.failed.is_empty() {
        println!("Could not fetch: {}", batch.failed.join(", "));
    }

    println!(
        "Categories: {}",
        leaderboard::ranking_categories(&batch.users).join(", ")
    );
    println!();
    println!("{:<24} {:<20} {:>8}", "username", "clan", "score");
    for row in leaderboard::rank_users(&batch.users, &category) {
        println!("{:<24} {:<20} {:>8}", row.username, row.clan, row.score);
    }

    Ok(())
}
