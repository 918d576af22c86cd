mod deposit_handler;
mod invest_handler;
mod withdraw_handler;

pub use invest_handler::InvestmentQuote;
