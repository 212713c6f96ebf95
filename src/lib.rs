pub mod codewarsclient;
pub mod leaderboard;
pub mod userfetcher;
