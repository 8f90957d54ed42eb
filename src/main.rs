use std::process;

fn main() {
    if let Err(e) = machine_registry_deploy::run() {
        eprintln!("Error: {e:?}");
        process::exit(1);
    }
}
