pub mod sqlite_connector;
