//! Careers commands: open positions and applications.

use clap::Subcommand;

use zenith_core::JobId;
use zenith_storefront::error::ApiError;
use zenith_storefront::pages::careers::{ApplicationForm, open_jobs, submit_application};

use super::Context;

#[derive(Subcommand)]
pub enum JobsAction {
    /// List open positions
    List,
    /// Apply for a position
    Apply {
        /// Job id
        id: i64,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        resume_url: Option<String>,

        #[arg(long)]
        cover_letter: Option<String>,
    },
}

pub async fn run(ctx: &Context, action: JobsAction) -> Result<(), ApiError> {
    match action {
        JobsAction::List => {
            let jobs = open_jobs(&ctx.api).await?;
            if jobs.is_empty() {
                println!("No open positions. Check back later for new opportunities!");
                return Ok(());
            }
            for job in jobs {
                let salary = job.salary_range.unwrap_or_else(|| "-".to_string());
                println!(
                    "  #{:<4} {:<28} {} / {} / {}  {}",
                    job.job_id, job.title, job.department, job.location, job.job_type, salary
                );
                println!("        {}", job.teaser);
            }
        }
        JobsAction::Apply {
            id,
            name,
            email,
            phone,
            resume_url,
            cover_letter,
        } => {
            let form = ApplicationForm {
                name,
                email,
                phone,
                resume_url: resume_url.unwrap_or_default(),
                cover_letter: cover_letter.unwrap_or_default(),
            };
            let message = submit_application(&ctx.api, JobId::new(id), &form).await?;
            println!("{message}");
        }
    }
    Ok(())
}
