use crate::infra::{lending_service, parse_loan_type};
use chrono::{Datelike, Utc};
use clap::Args;
use sme_credit::error::AppError;
use sme_credit::lending::policy::available_credit;
use sme_credit::lending::{ApplicationAssessment, LoanApplicationRequest, LoanType};
use sme_credit::scoring::{
    compute_credit_score_as_of, BusinessProfile, FactorKind, Money, ScoreResult,
};

#[derive(Args, Debug, Default)]
pub(crate) struct ProfileArgs {
    /// Year the business was founded
    #[arg(long)]
    pub(crate) established_year: Option<i32>,
    /// Average monthly revenue in AED (unreadable values count as zero)
    #[arg(long)]
    pub(crate) monthly_revenue: Option<String>,
    /// Number of employees
    #[arg(long)]
    pub(crate) employee_count: Option<u32>,
    /// Business category, e.g. trading, manufacturing, services
    #[arg(long)]
    pub(crate) business_type: Option<String>,
    /// Identity and documents have been verified
    #[arg(long)]
    pub(crate) verified: bool,
}

impl ProfileArgs {
    fn to_profile(&self) -> BusinessProfile {
        BusinessProfile {
            established_year: self.established_year,
            monthly_revenue: self.monthly_revenue.as_deref().map(Money::parse_lenient),
            employee_count: self.employee_count,
            business_type: self.business_type.clone(),
            is_verified: self.verified,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Evaluate as of this calendar year (defaults to the current year)
    #[arg(long)]
    pub(crate) current_year: Option<i32>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ApplicationArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Loan product: working_capital, supply_chain or community
    #[arg(long, value_parser = parse_loan_type, default_value = "working_capital")]
    pub(crate) loan_type: LoanType,
    /// Requested loan amount
    #[arg(long)]
    pub(crate) requested_amount: String,
    /// What the funds will be used for
    #[arg(long)]
    pub(crate) purpose: String,
    /// Currency code (defaults to the configured currency)
    #[arg(long)]
    pub(crate) currency: Option<String>,
    /// Repayment term in months
    #[arg(long)]
    pub(crate) repayment_term: Option<u16>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let profile = args.profile.to_profile();
    let current_year = args.current_year.unwrap_or_else(|| Utc::now().year());
    let result = compute_credit_score_as_of(&profile, current_year);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_score(&result, current_year);
    }
    Ok(())
}

pub(crate) fn run_application_assessment(args: ApplicationArgs) -> Result<(), AppError> {
    let service = lending_service()?;
    let profile = args.profile.to_profile();
    let request = LoanApplicationRequest {
        loan_type: args.loan_type,
        requested_amount: Money::parse_strict(&args.requested_amount),
        currency: args.currency,
        purpose: args.purpose,
        repayment_term: args.repayment_term,
    };

    let assessment = service.assess_application(&profile, &request, Utc::now())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        render_application(&assessment);
    }
    Ok(())
}

fn render_score(result: &ScoreResult, current_year: i32) {
    println!("Credit score (evaluated for {current_year})");
    println!(
        "Score: {} ({}, {} risk)",
        result.score,
        result.band().label(),
        result.risk_level.label()
    );
    println!(
        "Available credit: {} AED",
        available_credit(Some(result.score))
    );

    println!("\nFactors");
    render_factors(result);
}

fn render_factors(result: &ScoreResult) {
    for kind in FactorKind::ALL {
        if let Some(factor) = result.factors.get(kind) {
            println!(
                "- {}: {}/100 (weight {:.0}%)",
                kind.label(),
                factor.score,
                factor.weight * 100.0
            );
        }
    }
}

fn render_application(assessment: &ApplicationAssessment) {
    let ai = &assessment.ai_assessment;
    println!("Loan application {}", assessment.application_number);
    println!(
        "Requested: {} {} ({:?})",
        assessment.requested_amount, assessment.currency, assessment.loan_type
    );
    println!("Status: {}", assessment.status.label());
    println!("Interest rate: {}%", assessment.interest_rate);
    println!(
        "Credit score: {} ({} risk, {:?} confidence)",
        ai.credit_score,
        ai.risk_level.label(),
        ai.confidence
    );
    println!(
        "Recommended amount: {} {}",
        ai.recommended_amount, assessment.currency
    );

    println!("\nFactors");
    for (kind, factor) in ai.factors.iter() {
        println!("- {}: {}/100", kind.label(), factor.score);
    }
}
