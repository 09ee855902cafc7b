/// Document store adapters
mod mongo_sink;

pub use mongo_sink::MongoSink;
