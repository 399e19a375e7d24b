//! Demo binary for the command dispatch engine.
//!
//! Registers a handful of commands and dispatches the process argument
//! vector. Run with no arguments for the help listing:
//!
//! ```text
//! dispatch-demo add -a 5
//! dispatch-demo div -a 5 -b 0
//! dispatch-demo greet -name "hello world" -shout
//! dispatch-demo sleep -ms 250
//! ```

use std::time::Duration;

use command_dispatch_core::{ParameterSchema, ScalarKind};
use command_dispatch_engine::command::{CommandDescriptor, CommandHandler};
use command_dispatch_engine::dispatch::{DispatchOutcome, Dispatcher};
use command_dispatch_engine::help::AppInfo;
use command_dispatch_engine::registry::CommandRegistry;
use command_dispatch_engine::sink::ConsoleSink;

fn build_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    let add = CommandDescriptor::new(
        "add",
        CommandHandler::from_fn(|values| {
            let a = values[0].as_integer().unwrap_or_default();
            let b = values[1].as_integer().unwrap_or_default();
            println!("{}", a + b);
        }),
    )
    .with_description("Add two integers")
    .with_parameter(ParameterSchema::required("a", ScalarKind::Integer))
    .with_parameter(ParameterSchema::with_default("b", ScalarKind::Integer, "2"));

    let div = CommandDescriptor::new(
        "div",
        CommandHandler::from_fn(|values| {
            let a = values[0].as_float().unwrap_or_default();
            let b = values[1].as_float().unwrap_or_default();
            println!("{}", a / b);
        }),
    )
    .with_description("Divide two floats")
    .with_parameter(ParameterSchema::required("a", ScalarKind::Float))
    .with_parameter(ParameterSchema::required("b", ScalarKind::Float));

    let greet = CommandDescriptor::new(
        "greet",
        CommandHandler::from_fn(|values| {
            let name = values[0].as_text().unwrap_or_default();
            let shout = values[1].as_boolean().unwrap_or_default();
            let greeting = format!("Hello, {name}!");
            if shout {
                println!("{}", greeting.to_uppercase());
            } else {
                println!("{greeting}");
            }
        }),
    )
    .with_description("Print a greeting")
    .with_parameter(ParameterSchema::required("name", ScalarKind::Text))
    .with_parameter(ParameterSchema::with_default(
        "shout",
        ScalarKind::Boolean,
        "false",
    ));

    let sleep = CommandDescriptor::new(
        "sleep",
        CommandHandler::from_async(|values| async move {
            let ms = values[0].as_integer().unwrap_or_default().max(0) as u64;
            tokio::time::sleep(Duration::from_millis(ms)).await;
            println!("slept {ms} ms");
        }),
    )
    .with_description("Sleep asynchronously")
    .with_parameter(ParameterSchema::with_default(
        "ms",
        ScalarKind::Integer,
        "100",
    ));

    for descriptor in [add, div, greet, sleep] {
        if let Err(err) = registry.register(descriptor) {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }

    registry
}

#[tokio::main]
async fn main() {
    let dispatcher = Dispatcher::new(build_registry()).with_app_info(AppInfo::new(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    ));

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let outcome = dispatcher.dispatch(&argv, &ConsoleSink).await;

    if matches!(
        outcome,
        DispatchOutcome::Failed(_) | DispatchOutcome::Faulted
    ) {
        std::process::exit(1);
    }
}
