use crate::Questionnaire;
use crate::question::{Question, Section};

/// Company profile: the eight-section founder questionnaire whose answers
/// feed the investor report. Question ids are the report's field names.
pub struct CompanyProfile;

impl Questionnaire for CompanyProfile {
    fn id(&self) -> &str {
        "company_profile"
    }

    fn name(&self) -> &str {
        "Company Profile"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                Section::new(
                    "business-profiling",
                    "Business Profiling",
                    "Define your business identity and market position",
                    vec![
                        Question::text("htraction_startup_name", "Name of your startup"),
                        Question::yes_no("htraction_is_startup_registered", "Are you a Registered Startup?"),
                        Question::text("htraction_date_of_incorporation", "Date of Incorporation"),
                        Question::text("htraction_headquarter_location", "Headquarter Location"),
                        Question::text("htraction_industry_sector", "Industry/Sector"),
                        Question::text("other_industry_sector", "Please specify your Industry/Sector"),
                        Question::long_text("htraction_outreach_business_model", "Outreach Business Model"),
                        Question::text("htraction_startup_stage", "Stage of Startup"),
                        Question::yes_no(
                            "htraction_is_incubator_part",
                            "Are you currently or been part of any accelerator/incubator?",
                        ),
                        Question::text("htraction_incubator_name", "Please name the accelerator/Incubator"),
                        Question::yes_no("htraction_raise_funding_before", "Have you raised external funding before?"),
                        Question::text("htraction_funding_type", "Funding Type"),
                        Question::numeric("htraction_funding_amount", "Your last funding amount (in USD)"),
                        Question::text("htraction_funding_source", "Name Lead Investor(s) / Funding Source"),
                        Question::text(
                            "htraction_target_raise_amount",
                            "How much capital are you currently looking to raise (in USD)?",
                        ),
                        Question::text(
                            "htraction_current_funding_round",
                            "Which funding round are you currently raising?",
                        ),
                        Question::text(
                            "htraction_startup_pitch",
                            "The well-prepared pitch document is self-explanatory and should excite investors to shortlist a startup for presentation",
                        ),
                        Question::text("htraction_startup_website", "Website URL"),
                        Question::text("htraction_startup_linkedin", "LinkedIn Page"),
                        Question::text("htraction_startup_instagram", "Instagram Profile"),
                        Question::text("htraction_startup_twitter", "Twitter / X Handle"),
                    ],
                ),
                Section::new(
                    "business-model",
                    "Business Model",
                    "Explain how your business creates and captures value",
                    vec![
                        Question::text("htraction_total_addressable_market", "What is your Total Addressable Market (TAM)"),
                        Question::text(
                            "htraction_projected_annual_growth_rate",
                            "What is the projected annual growth rate (CAGR) of your target market over the next 5 years?",
                        ),
                        Question::text(
                            "htraction_market_shift_monitoring",
                            "Is your startup aligned with any major industry inflection points or market shifts (e.g. AI adoption, sustainability mandates, regulatory changes)?",
                        ),
                        Question::text(
                            "htraction_scalability_factor",
                            "Does your business model scale without a linear increase in cost?",
                        ),
                        Question::text("htraction_revenue_model", "What is your primary revenue model?"),
                        Question::text(
                            "htraction_recurring_revenue",
                            "Do you currently have any recurring or repeatable revenue streams?",
                        ),
                        Question::text(
                            "htraction_gross_margins",
                            "How would you describe your gross margins (actual or projected)?",
                        ),
                        Question::text("htraction_cac_ltv_ratio", "What is your CAC to LTV ratio (if known)?"),
                        Question::text(
                            "htraction_cac_ltv_evidence_file",
                            "Please upload your calculation (.xls, .doc, or .pdf)",
                        ),
                        Question::text(
                            "htraction_exit_strategy_mapped",
                            "Have you mapped your exit opportunities or strategic acquirers?",
                        ),
                    ],
                ),
                Section::new(
                    "growth-traction",
                    "Growth Traction",
                    "Showcase your progress, metrics, and momentum",
                    vec![
                        Question::text("htraction_annual_revenue_range", "What is your current annual revenue range?"),
                        Question::text(
                            "htraction_revenue_growth_trend",
                            "What has been your revenue growth trend over the last 6 months?",
                        ),
                        Question::text(
                            "htraction_customer_base_grown",
                            "How has your user/customer base grown in the last 6 months?",
                        ),
                        Question::text(
                            "htraction_repeat_customers_percent",
                            "What percentage of your customers are repeat users or subscribers?",
                        ),
                        Question::text(
                            "htraction_defined_customer_acquisition_strategy",
                            "Do you have a defined customer acquisition strategy in place?",
                        ),
                        Question::text(
                            "htraction_infra_scale_readiness",
                            "Is your current tech/product/ops infrastructure capable of handling a 10x increase in users or customers?",
                        ),
                        Question::text(
                            "htraction_growth_kpis_set",
                            "Have you established growth KPIs or milestones for the next 6-12 months?",
                        ),
                        Question::text(
                            "htraction_partnerships_explored",
                            "Have you explored strategic partnerships to drive growth (distribution, sales, co-branding)?",
                        ),
                        Question::text("htraction_operating_region", "Where are you currently operating?"),
                        Question::long_text("htraction_gtm_strategy", "Briefly explain your GTM strategy"),
                    ],
                ),
                Section::new(
                    "founders-profile",
                    "Founders Profile",
                    "Tell us about the founding team and their expertise",
                    vec![
                        Question::long_text("htraction_cap_table", "Create your current Cap Table"),
                        Question::long_text(
                            "htraction_founding_team_composition_table",
                            "What is the founding team composition?",
                        ),
                        Question::text(
                            "htraction_founder_experience",
                            "Do any founders have prior entrepreneurial experience (built or exited ventures)?",
                        ),
                        Question::text(
                            "htraction_founder_industry_experience",
                            "Do founders, individually or combined, have relevant experience in the target industry/domain?",
                        ),
                        Question::long_text(
                            "htraction_founding_team_functions",
                            "What key functions are represented by the founding team?",
                        ),
                        Question::text(
                            "htraction_core_team_experience",
                            "Has the core team worked together previously (past jobs, ventures, or projects)?",
                        ),
                        Question::text(
                            "htraction_are_cofounders_fulltime",
                            "Are all co-founders currently full-time on the startup?",
                        ),
                    ],
                ),
                Section::new(
                    "competitive-positioning",
                    "Competitive Positioning",
                    "Define your competitive advantages and market position",
                    vec![
                        Question::text(
                            "htraction_unique_value_proposition",
                            "How does your offering differentiate from the competition?",
                        ),
                        Question::text(
                            "htraction_product_differentiation_validated",
                            "Is your product/offering differentiation been validated by customers or users?",
                        ),
                        Question::text(
                            "htraction_pricing_position_comparison",
                            "How well does your pricing strategy align with your target customers and value proposition?",
                        ),
                    ],
                ),
                Section::new(
                    "sustainability-resilience",
                    "Sustainability & Resilience",
                    "Demonstrate long-term viability and risk management",
                    vec![
                        Question::text(
                            "htraction_current_cash_runway",
                            "What is your current cash runway based on average monthly burn?",
                        ),
                        Question::long_text(
                            "htraction_emergency_contingency_plan",
                            "If revenue drops and/or funding delays occur, what contingency measures are in place?",
                        ),
                        Question::text(
                            "htraction_multiple_revenue_streams",
                            "Do you have multiple revenue streams or levers to support survival during downturns?",
                        ),
                        Question::text(
                            "htraction_operational_pivot_experience",
                            "Has your leadership successfully navigated at least one major operational or financial challenge (e.g., pivot, crisis, founder change, down round)?",
                        ),
                    ],
                ),
                Section::new(
                    "innovation-differentiation",
                    "Innovation & Differentiation",
                    "Highlight your unique innovations and what sets you apart",
                    vec![
                        Question::text(
                            "htraction_technology_role",
                            "Which of the following best describes the role of technology in your value proposition?",
                        ),
                        Question::text(
                            "htraction_defensible_ip",
                            "Do you currently own or are you building proprietary technology or defensible IP?",
                        ),
                    ],
                ),
                Section::new(
                    "product-market-fit",
                    "Product-Market Fit (PMF)",
                    "Prove that you have achieved or are close to product-market fit",
                    vec![
                        Question::text(
                            "htraction_pmf_status",
                            "What best describes your current level of product-market fit and customer validation?",
                        ),
                        Question::text(
                            "htraction_net_promoter_score",
                            "What best describes your current customer satisfaction and retention strength?",
                        ),
                        Question::long_text(
                            "htraction_customer_acquisition_channels",
                            "Which best describes your primary customer acquisition channels?",
                        ),
                        Question::long_text(
                            "htraction_pmf_feedback_loop",
                            "What feedback loops do you have in place to improve product-market fit?",
                        ),
                    ],
                ),
            ]
        });
        &SECTIONS
    }
}
