use crate::error::{BankError, Result};
use crate::interfaces::rpc::client::BankClient;
use std::io::Write;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// Value printed for `F` when the Bank cannot be reached.
pub const END_EXECUTION_FAILED: i32 = -1;

/// One line of a client command script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `S`: print the wallet's balance.
    Balance,
    /// `O <amount>`: open a payment order against the wallet.
    Order { amount: i32 },
    /// `X <order_id> <amount> <wallet_id>`: confirm an order.
    Transfer {
        order_id: i32,
        amount: i32,
        wallet_id: String,
    },
    /// `F`: end the Bank's execution.
    Finish,
}

impl FromStr for Command {
    type Err = BankError;

    fn from_str(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let invalid = |reason: &str| BankError::InvalidCommand(format!("{reason}: '{line}'"));
        let number = |field: &str| {
            field
                .parse::<i32>()
                .map_err(|_| invalid("expected an integer"))
        };

        match fields.as_slice() {
            ["S", ..] => Ok(Command::Balance),
            ["F", ..] => Ok(Command::Finish),
            ["O", amount] => Ok(Command::Order {
                amount: number(*amount)?,
            }),
            ["O", ..] => Err(invalid("'O' takes one argument")),
            ["X", order_id, amount, wallet_id] => Ok(Command::Transfer {
                order_id: number(*order_id)?,
                amount: number(*amount)?,
                wallet_id: wallet_id.to_string(),
            }),
            ["X", ..] => Err(invalid("'X' takes three arguments")),
            _ => Err(invalid("unknown command")),
        }
    }
}

/// Replays a command script against the Bank on behalf of one wallet.
///
/// Each command prints a single integer to `out`. Blank lines are ignored;
/// unparseable commands and failed calls are logged at debug level and
/// skipped, except `F`, which prints [`END_EXECUTION_FAILED`] on failure.
/// `F` ends the script: nothing after it is read.
pub async fn run_script<R, W>(
    client: &mut BankClient,
    wallet_id: &str,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "ignoring command");
                continue;
            }
        };

        let result = match &command {
            Command::Balance => client.get_balance(wallet_id).await,
            Command::Order { amount } => client.create_payment_order(wallet_id, *amount).await,
            Command::Transfer {
                order_id,
                amount,
                wallet_id,
            } => client.transfer(*order_id, *amount, wallet_id).await,
            Command::Finish => Ok(client
                .end_execution()
                .await
                .unwrap_or(END_EXECUTION_FAILED)),
        };
        match result {
            Ok(value) => writeln!(out, "{value}")?,
            Err(e) => debug!(?command, error = %e, "command failed"),
        }
        if command == Command::Finish {
            break;
        }
    }
    out.flush()?;
    Ok(())
}
