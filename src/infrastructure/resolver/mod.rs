mod xiazaitool_resolver;

pub use xiazaitool_resolver::XiazaitoolResolver;
