use crate::config::{Config, MODEL_ADDR_VAR};
use anyhow::Result;
use drs_pipeline::{compile_pipeline, ModelBackend};
use reedline::{DefaultPrompt, Reedline, Signal};

/// `text:Kind` for every classified token, space-separated.
pub fn describe_tokens(drs: &str) -> String {
    drs_parser::parse_tokens(drs)
        .iter()
        .map(|t| format!("{}:{:?}", t.text, t.kind))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_help() {
    println!("  <drs>               Translate a DRS string to FOL");
    println!("  :tokens <drs>       Show classified tokens");
    println!("  :nl <text>          Premises → DRS (model backend) → FOL");
    println!("  :backend [host:port] Show or set model backend address");
    println!("  :quit               Exit");
}

pub fn run(config: &Config) -> Result<()> {
    println!("==================================================");
    println!("      DRS → First-Order Logic Translator REPL     ");
    println!("==================================================");

    let mut backend = ModelBackend::new(config.model_addr.clone());
    match backend.addr() {
        Some(addr) => println!("Model backend: {}", addr),
        None => println!(
            "Model backend: not configured (set {}=host:port for :nl)",
            MODEL_ADDR_VAR
        ),
    }
    println!("Ready. Commands: :quit :tokens <drs> :nl <text> :backend [addr] :help\n");

    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::default();

    loop {
        let sig = line_editor.read_line(&prompt);
        match sig {
            Ok(Signal::Success(buffer)) => {
                let input = buffer.trim();
                if input.is_empty() {
                    continue;
                }

                match input {
                    ":quit" | ":q" => break,
                    ":help" | ":h" => {
                        print_help();
                        continue;
                    }
                    ":backend" | ":b" => {
                        match backend.addr() {
                            Some(addr) => {
                                let status = if backend.is_connected() {
                                    "connected"
                                } else {
                                    "not connected (lazy)"
                                };
                                println!("[Backend] {} ({})", addr, status);
                            }
                            None => println!("[Backend] Not configured"),
                        }
                        continue;
                    }
                    _ => {}
                }

                // ── Route by prefix ──
                if let Some(drs) = input.strip_prefix(":tokens ") {
                    println!("[Tokens] {}", describe_tokens(drs));
                } else if let Some(addr) = input.strip_prefix(":backend ") {
                    let addr = addr.trim();
                    backend.set_addr(addr.to_string());
                    println!("[Backend] Set to {} (connects on first use)", addr);
                } else if let Some(text) = input.strip_prefix(":nl ") {
                    match compile_pipeline(text.trim(), &mut backend) {
                        Ok(translations) => {
                            for t in translations {
                                println!("[Premise] {}", t.premise);
                                println!("[DRS] {}", t.drs);
                                println!("[FOL] {}", t.fol);
                            }
                        }
                        Err(e) => println!("[Error] {}", e),
                    }
                } else {
                    println!("[FOL] {}", drs_semantics::translate(input));
                }
            }
            Ok(Signal::CtrlD) | Ok(Signal::CtrlC) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
