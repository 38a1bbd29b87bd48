use std::{
    error::Error,
    ffi::OsString,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kenshi_ledger::{identity::Identity, Address, Amount, Call, Host};

type CliResult<T> = Result<T, Box<dyn Error>>;

//==================== Command line ====================//

#[derive(Parser, Debug)]
#[command(name = "kns", version, about = "Kenshi (KNS) token ledger")]
struct Cli {
    /// JSON file holding the host state between invocations
    #[arg(long, env = "KNS_STATE", default_value = "kns-state.json", global = true)]
    state: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "KNS_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct KeyArg {
    /// 32-byte Ed25519 secret key in hex; the caller's account derives from it
    #[arg(long, env = "KNS_KEY", hide_env_values = true)]
    key: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a key pair and print its account address
    Keygen,
    /// Print the account address of a secret key
    Address {
        #[command(flatten)]
        key: KeyArg,
    },
    /// Deploy a token; the caller receives the whole supply and ownership
    Deploy {
        #[command(flatten)]
        key: KeyArg,
        #[arg(long, value_parser = parse_amount)]
        supply: Amount,
    },
    /// Print token metadata, supply and owner
    Info { contract: Address },
    Balance { contract: Address, account: Address },
    Allowance {
        contract: Address,
        owner: Address,
        spender: Address,
    },
    Owner { contract: Address },
    Transfer {
        contract: Address,
        #[command(flatten)]
        key: KeyArg,
        #[arg(long)]
        to: Address,
        #[arg(long, value_parser = parse_amount)]
        amount: Amount,
    },
    Approve {
        contract: Address,
        #[command(flatten)]
        key: KeyArg,
        #[arg(long)]
        spender: Address,
        #[arg(long, value_parser = parse_amount)]
        amount: Amount,
    },
    IncreaseAllowance {
        contract: Address,
        #[command(flatten)]
        key: KeyArg,
        #[arg(long)]
        spender: Address,
        #[arg(long, value_parser = parse_amount)]
        delta: Amount,
    },
    DecreaseAllowance {
        contract: Address,
        #[command(flatten)]
        key: KeyArg,
        #[arg(long)]
        spender: Address,
        #[arg(long, value_parser = parse_amount)]
        delta: Amount,
    },
    TransferFrom {
        contract: Address,
        #[command(flatten)]
        key: KeyArg,
        #[arg(long)]
        owner: Address,
        #[arg(long)]
        to: Address,
        #[arg(long, value_parser = parse_amount)]
        amount: Amount,
    },
    TransferOwnership {
        contract: Address,
        #[command(flatten)]
        key: KeyArg,
        #[arg(long)]
        new_owner: Address,
    },
    RenounceOwnership {
        contract: Address,
        #[command(flatten)]
        key: KeyArg,
    },
    /// Move tokens of `asset` held by the contract out to `to` (owner only)
    Recover {
        contract: Address,
        #[command(flatten)]
        key: KeyArg,
        #[arg(long)]
        asset: Address,
        #[arg(long)]
        to: Address,
        #[arg(long, value_parser = parse_amount)]
        amount: Amount,
    },
    /// Credit native value to an account (local development only)
    FundNative {
        account: Address,
        #[arg(long, value_parser = parse_amount)]
        value: Amount,
    },
    SendNative {
        #[command(flatten)]
        key: KeyArg,
        #[arg(long)]
        to: Address,
        #[arg(long, value_parser = parse_amount)]
        value: Amount,
    },
    NativeBalance { account: Address },
    /// Print balances, allowances, events and the state root as JSON
    Snapshot { contract: Address },
}

fn parse_amount(s: &str) -> Result<Amount, String> {
    Amount::from_dec_str(s.trim()).map_err(|e| format!("invalid amount '{s}': {e:?}"))
}

//==================== State file ====================//

fn load_host(path: &Path) -> CliResult<Host> {
    if !path.exists() {
        debug!(path = %path.display(), "no state file, starting empty");
        return Ok(Host::new());
    }
    let bytes = fs::read(path)?;
    let host = serde_json::from_slice(&bytes)
        .map_err(|err| format!("state file {} rejected: {err}", path.display()))?;
    Ok(host)
}

/// Sibling path the new state is written to before it replaces the old one.
fn staging_path(path: &Path) -> PathBuf {
    let mut staged = OsString::from(path.as_os_str());
    staged.push(".tmp");
    PathBuf::from(staged)
}

fn save_host(path: &Path, host: &Host) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let staged = staging_path(path);
    let mut file = File::create(&staged)?;
    file.write_all(&serde_json::to_vec_pretty(host)?)?;
    file.sync_all()?;
    drop(file);
    fs::rename(&staged, path)?;
    debug!(path = %path.display(), "state saved");
    Ok(())
}

fn caller(key: &KeyArg) -> CliResult<Address> {
    Ok(Identity::from_secret_hex(&key.key)?.address())
}

//==================== Commands ====================//

/// Runs the commands that never read or write the state file.
fn run_offline(command: &Command) -> Option<CliResult<()>> {
    match command {
        Command::Keygen => {
            let id = Identity::generate();
            println!("secret:  {}", id.secret_hex());
            println!("public:  {}", id.public_hex());
            println!("address: {}", id.address());
            Some(Ok(()))
        }
        Command::Address { key } => Some(caller(key).map(|address| println!("{address}"))),
        _ => None,
    }
}

/// Returns `true` when the host was modified and must be written back.
fn run(command: Command, host: &mut Host) -> CliResult<bool> {
    if let Some(result) = run_offline(&command) {
        return result.map(|()| false);
    }
    let (contract, key, call) = match command {
        // handled by run_offline
        Command::Keygen | Command::Address { .. } => return Ok(false),
        Command::Deploy { key, supply } => {
            let address = host.deploy(caller(&key)?, supply)?;
            println!("{address}");
            return Ok(true);
        }
        Command::Info { contract } => {
            let token = host.token(&contract)?;
            println!("name:         {}", token.name());
            println!("symbol:       {}", token.symbol());
            println!("decimals:     {}", token.decimals());
            println!("total supply: {}", token.total_supply());
            println!("owner:        {}", token.owner());
            return Ok(false);
        }
        Command::Balance { contract, account } => {
            println!("{}", host.token(&contract)?.balance_of(&account));
            return Ok(false);
        }
        Command::Allowance {
            contract,
            owner,
            spender,
        } => {
            println!("{}", host.token(&contract)?.allowance(&owner, &spender));
            return Ok(false);
        }
        Command::Owner { contract } => {
            println!("{}", host.token(&contract)?.owner());
            return Ok(false);
        }
        Command::NativeBalance { account } => {
            println!("{}", host.native_balance(&account));
            return Ok(false);
        }
        Command::Snapshot { contract } => {
            let snapshot = host.token(&contract)?.snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            return Ok(false);
        }
        Command::FundNative { account, value } => {
            host.fund_native(account, value)?;
            return Ok(true);
        }
        Command::SendNative { key, to, value } => {
            host.send_native(caller(&key)?, to, value)?;
            return Ok(true);
        }
        Command::Transfer {
            contract,
            key,
            to,
            amount,
        } => (contract, key, Call::Transfer { to, amount }),
        Command::Approve {
            contract,
            key,
            spender,
            amount,
        } => (contract, key, Call::Approve { spender, amount }),
        Command::IncreaseAllowance {
            contract,
            key,
            spender,
            delta,
        } => (contract, key, Call::IncreaseAllowance { spender, delta }),
        Command::DecreaseAllowance {
            contract,
            key,
            spender,
            delta,
        } => (contract, key, Call::DecreaseAllowance { spender, delta }),
        Command::TransferFrom {
            contract,
            key,
            owner,
            to,
            amount,
        } => (contract, key, Call::TransferFrom { owner, to, amount }),
        Command::TransferOwnership {
            contract,
            key,
            new_owner,
        } => (contract, key, Call::TransferOwnership { new_owner }),
        Command::RenounceOwnership { contract, key } => {
            (contract, key, Call::RenounceOwnership)
        }
        Command::Recover {
            contract,
            key,
            asset,
            to,
            amount,
        } => (contract, key, Call::RecoverErc20 { asset, to, amount }),
    };
    host.call(caller(&key)?, contract, call)?;
    Ok(true)
}

//==================== main ====================//

fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match run_offline(&cli.command) {
        Some(result) => result,
        None => load_host(&cli.state).and_then(|mut host| {
            if run(cli.command, &mut host)? {
                save_host(&cli.state, &host)?;
                info!(path = %cli.state.display(), "ok");
            }
            Ok(())
        }),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(2);
    }
}
