use super::prompt::{PromptError, Prompter};
use super::render::{print_messages, render_product_detail, render_product_table, render_summary};
use super::setup::{Cli, Commands};
use super::shell::Shell;
use anyhow::{bail, Result};
use clap::Parser;
use directories::ProjectDirs;
use invtrack::api::{CmdMessage, InventoryApi, MessageLevel};
use invtrack::config::{InvConfig, CONFIG_DIR_ENV, DATA_FILE_ENV};
use invtrack::model::{NewProduct, ProductUpdate};
use invtrack::store::fs::FileBackend;
use invtrack::store::InventoryBackend;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: InventoryApi<FileBackend>,
    config: InvConfig,
    load_messages: Vec<CmdMessage>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => handle_shell(&mut ctx),
        Commands::Add {
            id,
            name,
            quantity,
            price,
            category,
        } => {
            let mut product = NewProduct::new(id, name, quantity, price);
            if let Some(category) = category {
                product = product.with_category(category);
            }
            handle_add(&mut ctx, product)
        }
        Commands::Update {
            id,
            name,
            quantity,
            price,
            category,
        } => {
            let update = ProductUpdate {
                name,
                quantity,
                price,
                category,
            };
            handle_update(&mut ctx, &id, &update)
        }
        Commands::Remove { id, yes } => handle_remove(&mut ctx, &id, yes),
        Commands::View { id } => handle_view(&mut ctx, &id),
        Commands::Search { term } => handle_search(&mut ctx, &term),
        Commands::List { sort } => handle_list(&mut ctx, &sort),
        Commands::Summary => handle_summary(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("invtrack={}", level)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "invtrack", "invtrack").map(|dirs| dirs.config_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> AppContext {
    let config = match config_dir() {
        Some(dir) => InvConfig::load(&dir).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring config file");
            InvConfig::default()
        }),
        None => InvConfig::default(),
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_file = std::env::var_os(DATA_FILE_ENV).map(PathBuf::from);
    let data_file = config.resolve_data_file(cli.file.as_deref(), env_file.as_deref(), &cwd);
    debug!(path = %data_file.display(), "using inventory file");

    let (api, load_result) = InventoryApi::open(FileBackend::new(data_file));
    AppContext {
        api,
        config,
        load_messages: load_result.messages,
    }
}

/// Subcommands keep stdout for their own output; only load problems are
/// reported, on stderr.
fn report_load_warnings(ctx: &AppContext) -> Result<()> {
    let warnings: Vec<_> = ctx
        .load_messages
        .iter()
        .filter(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
        .cloned()
        .collect();
    print_messages(&mut io::stderr().lock(), &warnings)?;
    Ok(())
}

/// A file that could not be loaded would be replaced wholesale by the next
/// save, so subcommands that write refuse to run until it is fixed or moved.
fn ensure_writable(ctx: &AppContext) -> Result<()> {
    report_load_warnings(ctx)?;
    if ctx
        .load_messages
        .iter()
        .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    {
        bail!(
            "refusing to overwrite {}, which could not be loaded; fix or move it and try again",
            ctx.api.backend().location()
        );
    }
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "Welcome to the Inventory Management System!")?;
    print_messages(&mut out, &ctx.load_messages)?;

    let prompter = Prompter::new(io::stdin().lock(), out, ctx.config.prompt_attempts());
    Shell::new(&mut ctx.api, prompter).run()
}

fn handle_add(ctx: &mut AppContext, product: NewProduct) -> Result<()> {
    ensure_writable(ctx)?;
    let result = ctx.api.add_product(product)?;
    let saved = ctx.api.save()?;

    let mut out = io::stdout().lock();
    print_messages(&mut out, &result.messages)?;
    print_messages(&mut out, &saved.messages)?;
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: &str, update: &ProductUpdate) -> Result<()> {
    ensure_writable(ctx)?;
    let result = ctx.api.update_product(id, update)?;
    let saved = ctx.api.save()?;

    let mut out = io::stdout().lock();
    for product in &result.affected_products {
        render_product_detail(&mut out, product)?;
    }
    print_messages(&mut out, &result.messages)?;
    print_messages(&mut out, &saved.messages)?;
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: &str, yes: bool) -> Result<()> {
    ensure_writable(ctx)?;
    let current = ctx.api.view_product(id)?;

    if !yes {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock(), 1);
        for product in &current.listed_products {
            render_product_detail(prompter.output(), product)?;
        }
        let prompt = "Are you sure you want to remove this product? (y/n): ";
        let confirmed = match prompter.confirm(prompt) {
            Ok(answer) => answer,
            Err(PromptError::Closed) => false,
            Err(e) => return Err(e.into()),
        };
        if !confirmed {
            print_messages(
                prompter.output(),
                &[CmdMessage::info("Product removal cancelled.")],
            )?;
            return Ok(());
        }
    }

    let result = ctx.api.remove_product(id)?;
    let saved = ctx.api.save()?;

    let mut out = io::stdout().lock();
    print_messages(&mut out, &result.messages)?;
    print_messages(&mut out, &saved.messages)?;
    Ok(())
}

fn handle_view(ctx: &mut AppContext, id: &str) -> Result<()> {
    report_load_warnings(ctx)?;
    let result = ctx.api.view_product(id)?;

    let mut out = io::stdout().lock();
    for product in &result.listed_products {
        render_product_detail(&mut out, product)?;
    }
    Ok(())
}

fn handle_search(ctx: &mut AppContext, term: &str) -> Result<()> {
    report_load_warnings(ctx)?;
    let result = ctx.api.search_products(term);

    let mut out = io::stdout().lock();
    print_messages(&mut out, &result.messages)?;
    if !result.listed_products.is_empty() {
        render_product_table(&mut out, &result.listed_products)?;
    }
    Ok(())
}

fn handle_list(ctx: &mut AppContext, sort: &str) -> Result<()> {
    report_load_warnings(ctx)?;
    let mut out = io::stdout().lock();
    if ctx.api.inventory().is_empty() {
        writeln!(out, "No products in inventory.")?;
        return Ok(());
    }

    let result = ctx.api.list_products(sort);
    print_messages(&mut io::stderr().lock(), &result.messages)?;
    render_product_table(&mut out, &result.listed_products)?;
    if let Some(summary) = &result.summary {
        render_summary(&mut out, summary)?;
    }
    Ok(())
}

fn handle_summary(ctx: &mut AppContext) -> Result<()> {
    report_load_warnings(ctx)?;
    render_summary(&mut io::stdout().lock(), &ctx.api.summary())?;
    Ok(())
}
