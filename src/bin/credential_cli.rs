// src/bin/credential_cli.rs
//! Interactive account menu: signup, login, profile, user list, export

use anyhow::{Context, Result};
use credential_vault::prompt::{LineSource, StdinSource};
use credential_vault::{export_to_json, Authenticator, CoreError, Password, Session, UserRecord};
use rpassword::prompt_password;
use tracing::info;
use tracing_subscriber::EnvFilter;

const MENU: &str = "
1) Sign up
2) Log in
3) Profile
4) List users
5) Export users to JSON
6) Log out
0) Exit
";

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let auth = Authenticator::from_config();
    info!(store = %auth.store().path().display(), "credential store ready");

    let mut input = StdinSource::new();
    let mut session = Session::Anonymous;

    loop {
        match session.username() {
            Some(user) => println!("{MENU}Logged in as {user}"),
            None => println!("{MENU}Not logged in"),
        }
        let Some(choice) = input.read_line("> ")? else {
            break;
        };

        match choice.trim() {
            "1" => signup(&auth, &mut input)?,
            "2" => login(&auth, &mut input, &mut session)?,
            "3" => profile(&auth, &session)?,
            "4" => list_users(&auth)?,
            "5" => export(&auth, &mut input)?,
            "6" => match session.logout() {
                Some(identity) => println!("Goodbye, {}.", identity.username()),
                None => println!("Nobody is logged in."),
            },
            "0" | "q" | "quit" => break,
            other => println!("Unknown option: {other}"),
        }
    }

    Ok(())
}

fn read_password(prompt: &str) -> Result<Password> {
    let raw = prompt_password(prompt).context("failed to read password")?;
    Ok(Password::new(raw))
}

fn signup(auth: &Authenticator, input: &mut impl LineSource) -> Result<()> {
    let Some(username) = input.read_line("Choose a username: ")? else {
        return Ok(());
    };
    let password = read_password("Choose a password: ")?;

    match auth.signup(&username, &password) {
        Ok(()) => println!("Signup successful! You can now log in."),
        Err(err) => report(&err),
    }
    Ok(())
}

fn login(auth: &Authenticator, input: &mut impl LineSource, session: &mut Session) -> Result<()> {
    let Some(username) = input.read_line("Enter username: ")? else {
        return Ok(());
    };
    let password = read_password("Enter password: ")?;

    match auth.login(&username, &password) {
        Ok(identity) => {
            println!("Login successful. Welcome, {}!", identity.username());
            session.establish(identity);
        }
        Err(err) => report(&err),
    }
    Ok(())
}

fn profile(auth: &Authenticator, session: &Session) -> Result<()> {
    let Some(username) = session.username() else {
        println!("Log in first.");
        return Ok(());
    };

    match auth.profile(username) {
        Ok(Some(record)) => {
            println!("\n--- Profile: {} ---", record.username);
            println!("Games played: {}", record.games_played);
            println!("Games won: {}", record.games_won);
            println!("Quizzes completed: {}", record.quizzes_passed);
            println!("Last login: {}", record.last_login_display());
        }
        Ok(None) => println!("Profile not found."),
        Err(err) => report(&err),
    }
    Ok(())
}

fn list_users(auth: &Authenticator) -> Result<()> {
    let records = match auth.list_users() {
        Ok(records) => records,
        Err(err) => {
            report(&err);
            return Ok(());
        }
    };

    if records.is_empty() {
        println!("No users registered.");
        return Ok(());
    }

    println!("\n--- Registered Users ---");
    for record in &records {
        print_summary(record);
    }
    Ok(())
}

fn print_summary(record: &UserRecord) {
    println!(
        "{} | hash={} | games={} won={} quizzes={} last={}",
        record.username,
        record.password_hash,
        record.games_played,
        record.games_won,
        record.quizzes_passed,
        record.last_login_display()
    );
}

fn export(auth: &Authenticator, input: &mut impl LineSource) -> Result<()> {
    let Some(path) = input.read_line("Export to file [users.json]: ")? else {
        return Ok(());
    };
    let path = if path.trim().is_empty() {
        "users.json".to_string()
    } else {
        path.trim().to_string()
    };

    match export_to_json(auth.store(), &path) {
        Ok(count) => println!("Exported {count} user(s) → {path}"),
        Err(err) => report(&err),
    }
    Ok(())
}

fn report(err: &CoreError) {
    println!("{}", err.public_message());
}
