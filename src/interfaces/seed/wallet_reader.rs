use crate::domain::wallet::{Balance, Wallet, WalletId};
use crate::error::{BankError, Result};
use std::io::Read;

/// Reads initial wallets from `<wallet_id> <balance>` lines.
///
/// Lines that do not split into exactly two fields are skipped silently.
/// Lines whose balance is not a non-negative integer within the ledger limit
/// yield an error, so the caller can report them and carry on.
pub struct WalletSeedReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> WalletSeedReader<R> {
    /// Creates a new `WalletSeedReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads wallets.
    pub fn wallets(self) -> impl Iterator<Item = Result<Wallet>> {
        self.reader
            .into_records()
            .filter_map(|record| match record {
                Ok(record) => parse_record(&record).transpose(),
                Err(e) => Some(Err(BankError::from(e))),
            })
    }
}

fn parse_record(record: &csv::StringRecord) -> Result<Option<Wallet>> {
    let fields: Vec<&str> = record.iter().flat_map(str::split_whitespace).collect();
    let [id, balance] = fields.as_slice() else {
        return Ok(None);
    };

    let id = WalletId::parse(*id)?;
    let balance = balance
        .parse::<i64>()
        .ok()
        .and_then(Balance::new)
        .ok_or_else(|| BankError::InvalidSeed(format!("{id}: invalid balance '{balance}'")))?;
    Ok(Some(Wallet::new(id, balance)))
}
