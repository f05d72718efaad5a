pub mod wallet_reader;
