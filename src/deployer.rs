use alloy::{
    network::{EthereumWallet, ReceiptResponse, TransactionBuilder},
    primitives::{Bytes, U256},
    providers::{Provider, ProviderBuilder},
    rpc::types::eth::TransactionRequest,
};
use eyre::{bail, ContextCompat};
use owo_colors::OwoColorize;
use tokio::runtime::Builder;

use crate::{
    artifact::Artifact,
    config::Deploy,
    formatting::{format_balance, format_code_size, format_gas},
};

pub fn deploy(config: &Deploy) -> eyre::Result<()> {
    let runtime = Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(deploy_impl(config))
}

async fn deploy_impl(config: &Deploy) -> eyre::Result<()> {
    let signer = config.auth.wallet()?;
    let sender = signer.address();

    let artifact = Artifact::load(&config.artifact)?;
    let init_code = artifact.init_code(&config.args)?;

    let endpoint = config.rpc_url()?;
    let rpc_url = endpoint.parse()?;
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_http(rpc_url);

    println!(
        "deploying {} with account: {}",
        artifact.contract_name,
        sender.bright_purple()
    );
    println!("init code size: {}", format_code_size(init_code.len(), 20, 24));
    println!("deploying to RPC: {}", &endpoint.bright_magenta());

    let balance = provider.get_balance(sender).await?;
    if balance == U256::ZERO {
        bail!(
            "no funds in account {} to pay for the deployment\n\
             balance {}",
            sender.red(),
            format_balance(balance).unwrap_or("???".red().to_string()),
        );
    }

    let tx = TransactionRequest::default()
        .into_create()
        .with_input(Bytes::from(init_code));
    let receipt = provider.send_transaction(tx).await?.get_receipt().await?;
    let address = receipt
        .contract_address()
        .wrap_err("failed to read contract address from tx receipt")?;

    println!(
        "{} deployed at: {}",
        artifact.contract_name,
        address.bright_purple()
    );
    println!("gas used: {}", format_gas(U256::from(receipt.gas_used)));
    println!(
        "deployment tx hash: {}",
        receipt.transaction_hash.bright_magenta()
    );
    if let Some(explorer) = config.explorer() {
        println!("explorer: {explorer}/address/{address}");
    }

    Ok(())
}
