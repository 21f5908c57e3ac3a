//! Command handlers: thin glue between the CLI surface and the managers.

use anyhow::Result;
use onestop_application::{
    document_from_upload, sign_out, ApplicationCheckout, AuthManager, DigiLockerImporter,
    StudentManager,
};
use onestop_core::route::{Route, RouteGuard, RouteOutcome};
use onestop_core::student::{ApplicationStatus, ProfileUpdate};
use onestop_core::{deadline, university};

pub async fn signup(auth: &AuthManager, email: &str, password: &str, name: &str) -> Result<()> {
    match auth.signup(email, password, name).await {
        Ok(session) => {
            println!("Welcome, {}! Signed in as {}.", session.name, session.email);
            Ok(())
        }
        Err(e) if e.is_invalid_credentials() => {
            println!("{}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn login(auth: &AuthManager, email: &str, password: &str) -> Result<()> {
    match auth.login(email, password).await {
        Ok(session) => {
            println!("Welcome back, {}!", session.name);
            Ok(())
        }
        Err(e) if e.is_invalid_credentials() => {
            println!("{}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn logout(auth: &AuthManager, student: &StudentManager) -> Result<()> {
    sign_out(auth, student).await?;
    println!("Signed out. Student data cleared.");
    Ok(())
}

pub async fn profile_show(student: &StudentManager) -> Result<()> {
    let profile = student.profile().await;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

pub async fn profile_set(student: &StudentManager, field: &str, value: &str) -> Result<()> {
    let Some(update) = ProfileUpdate::from_field(field, value) else {
        println!("Unknown profile field: {}", field);
        std::process::exit(1);
    };
    student.update_profile(update).await?;
    println!("Updated {}.", field);
    Ok(())
}

pub async fn universities(student: &StudentManager, search: &str, exams: &[String]) -> Result<()> {
    let exam_ids: Vec<&str> = exams.iter().map(String::as_str).collect();
    let hits = university::search(search, &exam_ids);

    for uni in &hits {
        let applied = if student.has_applied(uni.id).await {
            "  [applied]"
        } else {
            ""
        };
        println!(
            "{:>2}. {} ({}) - {:?}, fee Rs {}, rating {:.1}{}",
            uni.id, uni.name, uni.location, uni.kind, uni.fee, uni.rating, applied
        );
    }
    println!("{} of {} universities", hits.len(), university::catalog().len());
    Ok(())
}

pub async fn apply(student: &StudentManager, university_ids: &[String]) -> Result<()> {
    let ids: Vec<&str> = university_ids.iter().map(String::as_str).collect();
    let checkout = ApplicationCheckout::new(student.clone());
    println!("Application fee total: Rs {}", checkout.quote(&ids));

    let outcome = checkout.submit(&ids).await?;
    for app in &outcome.submitted {
        println!("Applied to {} ({})", app.university_name, app.course);
    }
    for id in &outcome.skipped {
        println!("Skipped university {} (already applied or unknown)", id);
    }
    println!(
        "Successfully applied to {} university(ies). Fees paid (simulated): Rs {}",
        outcome.submitted.len(),
        outcome.total_fee
    );
    Ok(())
}

pub async fn applications(student: &StudentManager) -> Result<()> {
    let apps = student.applications().await;
    if apps.is_empty() {
        println!("No applications yet. Browse universities with `onestop universities`.");
        return Ok(());
    }
    for app in apps {
        println!(
            "{}  {}  {}  applied {}  [{}]  Rs {}",
            app.id, app.university_name, app.course, app.applied_date, app.status, app.fee
        );
    }
    Ok(())
}

pub async fn set_status(student: &StudentManager, id: &str, status: &str) -> Result<()> {
    let status: ApplicationStatus = match status.parse() {
        Ok(status) => status,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };
    student.update_application_status(id, status).await?;
    println!("Status of {} set to {}.", id, status);
    Ok(())
}

pub async fn documents_list(student: &StudentManager) -> Result<()> {
    let docs = student.documents().await;
    if docs.is_empty() {
        println!("The vault is empty. Upload a file or import from DigiLocker.");
        return Ok(());
    }
    for doc in docs {
        println!(
            "{}  {}  {}  {}  {}",
            doc.id, doc.name, doc.mime_type, doc.size, doc.uploaded_date
        );
    }
    Ok(())
}

pub async fn documents_upload(student: &StudentManager, name: &str, size: u64) -> Result<()> {
    let document = document_from_upload(name, size);
    println!("Uploaded {} ({}, {})", document.name, document.mime_type, document.size);
    student.add_document(document).await?;
    Ok(())
}

pub async fn documents_import(student: &StudentManager) -> Result<()> {
    let importer = DigiLockerImporter::new(student.clone());

    println!("Connecting to DigiLocker...");
    let available = importer.connect().await;
    println!("Available documents:");
    for doc in available {
        println!("  {} ({}, {})", doc.name, doc.issuer, doc.kind);
    }

    println!("Importing...");
    let imported = importer.import().await?;
    for doc in &imported {
        println!("  Imported {} ({})", doc.name, doc.size);
    }
    println!("{} document(s) imported.", imported.len());
    Ok(())
}

pub async fn documents_remove(student: &StudentManager, id: &str) -> Result<()> {
    student.remove_document(id).await?;
    println!("Removed {}.", id);
    Ok(())
}

pub fn deadlines() -> Result<()> {
    let today = chrono::Local::now().date_naive();

    let urgent = deadline::urgent(today);
    if !urgent.is_empty() {
        println!("You have {} deadline(s) within the next 7 days!", urgent.len());
    }

    for d in deadline::upcoming(today) {
        println!(
            "{}  {:?}/{:?}  in {} day(s)  {}",
            d.date,
            d.kind,
            d.priority,
            d.days_remaining(today),
            d.title
        );
    }
    Ok(())
}

pub async fn open(auth: &AuthManager, path: &str) -> Result<()> {
    let route = Route::parse(path);
    let user = auth.current_user().await;
    match RouteGuard::evaluate(&route, user.as_ref(), auth.is_loading().await) {
        RouteOutcome::Allow => println!("{:?} -> render {}", route, route.path()),
        RouteOutcome::RedirectToAuth => println!("{:?} -> redirect to /auth", route),
        RouteOutcome::Loading => println!("{:?} -> loading...", route),
    }
    Ok(())
}
