use bizscore::scoring::RevenueBucket;
use bizscore::{
    assign_variant, calculate_business_health_score, get_gap_analysis, QuizAnswers, QuizField,
    SplitTestVariant,
};
use proptest::prelude::*;

const CRM: &[&str] = &["", "Yes (use it daily)", "Yes (but rarely)", "Spreadsheets", "No"];
const SPEED: &[&str] = &["", "Within 5 minutes", "Within 1 hour", "Same day", "Whenever I can"];
const MISSED: &[&str] = &["", "0-10%", "10-25%", "25-50%", "50%+"];
const CHAT: &[&str] = &["", "Yes (website + social)", "Yes (website only)", "Thinking about it", "No"];
const CONFIDENCE: &[&str] = &["", "Very confident", "Somewhat confident", "Not confident"];
const REVENUE: &[&str] = &["", "$0-$5K", "$5K-$20K", "$20K-$50K", "$50K-$100K", "$100K+"];
const FREQUENCY: &[&str] = &["", "Daily", "Several times a week", "Weekly", "Monthly", "Never"];
const AUDIENCE: &[&str] = &["", "Under 500", "500-1K", "1K-5K", "5K-10K", "10K-100K", "100K+"];
const BUDGET: &[&str] = &["", "$0", "$500-$1K", "$1K-$2K", "$2K-$5K", "$5K+"];

/// A recognized option or arbitrary text
fn option_or_text(options: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(options).prop_map(String::from),
        ".{0,30}",
    ]
}

/// Mix of recognized options and arbitrary text for all 13 fields
fn any_answers() -> impl Strategy<Value = QuizAnswers> {
    let lead_generation = (
        option_or_text(CRM),
        option_or_text(SPEED),
        option_or_text(MISSED),
        option_or_text(CHAT),
    );
    let offer_clarity = (option_or_text(CONFIDENCE), ".{0,80}", option_or_text(REVENUE));
    let social_presence = (option_or_text(FREQUENCY), option_or_text(AUDIENCE), ".{0,20}");
    let conversion_process = (option_or_text(BUDGET), ".{0,40}", ".{0,20}");

    (lead_generation, offer_clarity, social_presence, conversion_process).prop_map(
        |((crm, speed, missed, chat), (confidence, offer, revenue), (frequency, audience, handle), (budget, goal, site))| {
            QuizAnswers::new()
                .with(QuizField::CrmUsage, crm)
                .with(QuizField::LeadResponseSpeed, speed)
                .with(QuizField::MissedLeads, missed)
                .with(QuizField::ChatAgents, chat)
                .with(QuizField::OfferConfidence, confidence)
                .with(QuizField::MainOffer, offer)
                .with(QuizField::MonthlyRevenue, revenue)
                .with(QuizField::ContentFrequency, frequency)
                .with(QuizField::AudienceSize, audience)
                .with(QuizField::InstagramHandle, handle)
                .with(QuizField::MonthlyAdBudget, budget)
                .with(QuizField::NinetyDayGoal, goal)
                .with(QuizField::Website, site)
        },
    )
}

fn midpoint((low, high): (u32, u32)) -> u32 {
    (low + high) / 2
}

proptest! {
    #[test]
    fn scoring_is_deterministic(answers in any_answers()) {
        let first = calculate_business_health_score(&answers);
        let second = calculate_business_health_score(&answers);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn scores_stay_in_bounds(answers in any_answers()) {
        let score = calculate_business_health_score(&answers);
        prop_assert!(score.lead_generation <= 100);
        prop_assert!(score.offer_clarity <= 100);
        prop_assert!(score.social_presence <= 100);
        prop_assert!(score.conversion_process <= 100);
        prop_assert!(score.overall <= 100);
    }

    #[test]
    fn overall_is_rounded_mean(answers in any_answers()) {
        let s = calculate_business_health_score(&answers);
        let mean = f64::from(s.lead_generation + s.offer_clarity + s.social_presence + s.conversion_process) / 4.0;
        prop_assert_eq!(f64::from(s.overall), (mean + 0.5).floor());
    }

    #[test]
    fn potential_never_below_current(answers in any_answers()) {
        let score = calculate_business_health_score(&answers);
        let gap = get_gap_analysis(&answers, &score);
        let bucket = RevenueBucket::classify(answers.get(QuizField::MonthlyRevenue));

        prop_assert_eq!(gap.current_revenue.as_str(), bucket.label());
        prop_assert!(midpoint(bucket.potential_bounds()) > midpoint(bucket.bounds()));
        prop_assert!(gap.potential_leads >= f64::from(gap.current_leads));
        prop_assert!(gap.potential_close_rate >= gap.current_close_rate);
    }

    #[test]
    fn every_field_is_generated(answers in any_answers()) {
        prop_assert_eq!(answers.len(), QuizField::ALL.len());
    }

    #[test]
    fn fewer_missed_leads_never_scores_lower(answers in any_answers(), i in 1usize..4) {
        // MISSED[1..] runs from fewest to most missed leads
        let fewer = answers.clone().with(QuizField::MissedLeads, MISSED[i]);
        let more = answers.with(QuizField::MissedLeads, MISSED[i + 1]);
        let fewer_score = calculate_business_health_score(&fewer).lead_generation;
        let more_score = calculate_business_health_score(&more).lead_generation;
        prop_assert!(fewer_score >= more_score);
    }

    #[test]
    fn assignment_is_stable(session in "[a-zA-Z0-9-]{1,40}", test_id in any::<i64>(), a in 1u32..1000, b in 1u32..1000) {
        let variants = vec![SplitTestVariant::new("A", a), SplitTestVariant::new("B", b)];
        let first = assign_variant(&session, test_id, &variants);
        prop_assert!(first.is_some());
        prop_assert_eq!(assign_variant(&session, test_id, &variants), first);
    }
}
