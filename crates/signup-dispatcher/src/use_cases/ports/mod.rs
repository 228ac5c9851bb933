mod executor;

pub use executor::RequestExecutor;
