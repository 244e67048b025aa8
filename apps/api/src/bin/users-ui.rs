//! Terminal front end for the Users API.
//!
//! Edit the draft with `<field> <value>`, then `create`, `update`, or
//! `delete <id>`. The list is redrawn from the server after every change.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use users_api::client::view::{UserView, DRAFT_FIELDS};
use users_api::client::{UsersClient, DEFAULT_API_URL};

const HELP: &str = "\
commands:
  id|name|email|birthDate <value>   edit the draft
  create                            create a user from the draft
  update                            update user <draft id> from the draft
  delete <id>                       delete a user
  list                              reload the list
  help                              show this text
  quit                              exit";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_url = std::env::var("USERS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let mut view = UserView::new(UsersClient::new(base_url));

    if let Err(e) = view.mount().await {
        eprintln!("could not load users: {e}");
    }
    print_users(&view);
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        let (command, arg) = line
            .split_once(char::is_whitespace)
            .map(|(c, a)| (c, a.trim()))
            .unwrap_or((line, ""));

        let outcome = match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            field if DRAFT_FIELDS.contains(&field) => {
                view.set_field(field, arg);
                println!("draft: {:?}", view.draft);
                continue;
            }
            "create" => view.create().await,
            "update" => view.update().await,
            "delete" => match arg.parse::<i32>() {
                Ok(id) => view.delete(id).await,
                Err(_) => {
                    println!("usage: delete <id>");
                    continue;
                }
            },
            "list" => view.refresh().await.map(|_| "Users reloaded"),
            other => {
                println!("unknown command {other:?}, try help");
                continue;
            }
        };

        match outcome {
            Ok(notice) => {
                println!("{notice}");
                print_users(&view);
            }
            Err(e) => println!("request failed: {e}"),
        }
    }

    Ok(())
}

fn print_users<A: users_api::client::UsersApi>(view: &UserView<A>) {
    println!("Users");
    for row in view.render() {
        println!("  {row}");
    }
}
