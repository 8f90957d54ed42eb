use std::{fs, path::Path};

use eyre::{bail, Context};
use serde::Deserialize;

/// A compiled contract artifact, as emitted by the Solidity toolchain.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub abi: Vec<serde_json::Value>,
    pub bytecode: String,
}

impl Artifact {
    /// Reads and parses an artifact file.
    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read artifact {}", path.to_string_lossy()))?;
        serde_json::from_str(&raw).wrap_err("artifact is not valid artifact JSON")
    }

    /// The contract's creation bytecode.
    pub fn creation_code(&self) -> eyre::Result<Vec<u8>> {
        let bytecode = self.bytecode.strip_prefix("0x").unwrap_or(&self.bytecode);
        let code = hex::decode(bytecode).wrap_err("artifact bytecode is not proper hex")?;
        if code.is_empty() {
            bail!(
                "{} has no creation bytecode; is it abstract or an interface?",
                self.contract_name
            );
        }
        Ok(code)
    }

    /// Number of arguments the contract's constructor takes.
    pub fn constructor_arity(&self) -> usize {
        self.abi
            .iter()
            .find(|entry| entry["type"] == "constructor")
            .and_then(|entry| entry["inputs"].as_array())
            .map_or(0, Vec::len)
    }

    /// Assembles the init code: creation bytecode followed by the
    /// ABI-encoded constructor arguments.
    pub fn init_code(&self, args: &[String]) -> eyre::Result<Vec<u8>> {
        let arity = self.constructor_arity();
        if arity > 0 && args.is_empty() {
            bail!(
                "{}'s constructor takes {arity} arguments, but none were passed",
                self.contract_name
            );
        }

        let args = args
            .iter()
            .map(|arg| hex::decode(arg.strip_prefix("0x").unwrap_or(arg)))
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("constructor args were not proper hex strings")?
            .concat();

        Ok([self.creation_code()?, args].concat())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::Artifact;

    const ARTIFACT: &str = r#"{
        "_format": "hh-sol-artifact-1",
        "contractName": "MachineRegistry",
        "sourceName": "contracts/MachineRegistry.sol",
        "abi": [],
        "bytecode": "0x60806040",
        "deployedBytecode": "0x6080",
        "linkReferences": {}
    }"#;

    fn artifact(raw: &str) -> Artifact {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn loads_an_artifact_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{ARTIFACT}").unwrap();

        let artifact = Artifact::load(file.path()).unwrap();
        assert_eq!("MachineRegistry", artifact.contract_name);
        assert_eq!("0x60806040", artifact.bytecode);
    }

    #[test]
    fn fails_on_a_missing_artifact() {
        assert!(Artifact::load("no/such/artifact.json").is_err());
    }

    #[test]
    fn init_code_without_args_is_the_creation_code() {
        let init_code = artifact(ARTIFACT).init_code(&[]).unwrap();
        assert_eq!(vec![0x60, 0x80, 0x60, 0x40], init_code);
    }

    #[test]
    fn appends_constructor_args() {
        let args = vec!["0xdeadbeef".to_owned()];
        let init_code = artifact(ARTIFACT).init_code(&args).unwrap();
        assert_eq!(vec![0x60, 0x80, 0x60, 0x40, 0xde, 0xad, 0xbe, 0xef], init_code);
    }

    #[test]
    fn rejects_non_hex_args() {
        let args = vec!["machine".to_owned()];
        assert!(artifact(ARTIFACT).init_code(&args).is_err());
    }

    #[test]
    fn rejects_abstract_contracts() {
        let raw = ARTIFACT.replace("0x60806040", "0x");
        let error = artifact(&raw).init_code(&[]).unwrap_err();
        assert!(error.to_string().contains("no creation bytecode"));
    }

    #[test]
    fn counts_constructor_inputs() {
        let raw = ARTIFACT.replace(
            r#""abi": []"#,
            r#""abi": [{
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [{"name": "owner", "type": "address", "internalType": "address"}]
            }]"#,
        );
        let artifact = artifact(&raw);
        assert_eq!(1, artifact.constructor_arity());

        let error = artifact.init_code(&[]).unwrap_err();
        assert!(error.to_string().contains("constructor takes 1 arguments"));
    }
}
