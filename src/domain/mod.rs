pub mod report;

pub use report::{lamports_to_sol, AnalysisResult, TokenInfo, LAMPORTS_PER_SOL};
