//! The configured agents of the chat application

pub mod finance;
pub mod search;
pub mod team;

pub use finance::FinanceAgent;
pub use search::SearchAgent;
pub use team::StockAnalysisTeam;
