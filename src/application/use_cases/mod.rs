/// Use cases module containing application logic orchestration
mod load_report;

pub use load_report::LoadReportUseCase;
