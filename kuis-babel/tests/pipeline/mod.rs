mod properties;
mod scenario;
