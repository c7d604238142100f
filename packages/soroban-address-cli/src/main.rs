use clap::Parser;
use soroban_address::ContractId;

/// Convert a Soroban contract address to its 64-character hex identifier.
#[derive(Parser)]
#[clap(version)]
struct Args {
    /// The strkey-encoded contract address (C...), or a 64-character hex
    /// identifier when --strkey is given. When absent the tool does nothing.
    contract_address: Option<String>,
    /// Convert in the opposite direction: read a hex identifier and print
    /// its strkey encoding.
    #[clap(long)]
    strkey: bool,
}

impl Args {
    pub fn exec(self) -> Result<(), String> {
        let Some(input) = self.contract_address else {
            return Ok(());
        };
        if self.strkey {
            let id = ContractId::from_hex(&input)
                .map_err(|e| format!("Failed to decode hex identifier: {e}"))?;
            println!("{id}");
        } else {
            let id = ContractId::from_string(&input)
                .map_err(|e| format!("Failed to decode contract address: {e}"))?;
            println!("{}", id.to_hex());
        }
        Ok(())
    }
}

fn main() {
    let args = Args::parse();
    if let Err(e) = args.exec() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
