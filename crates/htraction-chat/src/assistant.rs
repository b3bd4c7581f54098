//! The investor-side assistant: greeting, suggested prompts and canned
//! replies about the sample pipeline.

use crate::responder::CannedResponder;

pub const GREETING: &str = "Hello! I'm htraction AI. I can help you scout startups, analyze founders, and access private market data instantly. What would you like to know?";

pub const FALLBACK: &str = "I can help you scout startups, analyze founders, and access private market data. Try asking me about specific startups, founders, or investment opportunities.";

pub const SUGGESTED_PROMPTS: [&str; 5] = [
    "Show me AI startups",
    "Tell me about Star AI",
    "Who are the founders?",
    "Show me FinTech startups",
    "What startups match my thesis?",
];

const AI_STARTUPS: &str = "Here are some top AI startups in the pipeline:

**Star AI** (Hyderabad)
- Stage: MVP Stage | Seed Round
- HScore: 78/100
- Target Raise: $250K - $500K
- Focus: AI/ML solutions for enterprise automation
- Key Metrics: 10-20% MoM revenue growth, <$10K ARR
- Founders: Experienced team with prior startup experience

**DeepMind India** (Bangalore)
- Stage: Early Stage | Seed Round
- HScore: 85/100
- Target Raise: $500K - $1M
- Focus: Deep learning for healthcare diagnostics
- Key Metrics: Strong PMF indicators, defensible IP

Would you like more details on any of these?";

const STAR_AI: &str = "**Star AI** - Detailed Analysis

**Company Overview:**
- Industry: Artificial Intelligence / ML
- Location: Hyderabad, India
- Stage: MVP (Minimum Viable Product)
- Funding Round: Seed

**Financial Health:**
- Annual Revenue: <$10K
- Revenue Growth: 10-20% MoM
- Gross Margins: 50-70%
- Cash Runway: 6-12 months
- LTV:CAC Ratio: 2-3x

**Market Opportunity:**
- TAM: $1B+ (with strong data backing)
- Market Growth: 10-15% CAGR projected
- Operating Region: India & International

**Team:**
- 3 founders with complementary skills (CEO, COO, CFO)
- Prior entrepreneurial experience
- Key functions: Tech, Product, Sales/Marketing, Strategy/Operations, Finance

**Competitive Advantage:**
- Technology is core differentiator (deep tech/IP)
- Patents/IP granted
- Product differentiation consistently validated

**Investment Highlights:**
- Strong innovation with defensible IP
- Good PMF indicators
- Experienced founding team
- Scalable business model

Would you like to see their full report or compare with similar startups?";

const FOUNDERS: &str = "**Star AI - Founding Team:**

**Founder 1 (CEO)**
- Role: Chief Executive Officer
- Ownership: 33%
- Investment: $40,000
- Background: Prior startup experience, strong domain expertise

**Founder 2 (COO)**
- Role: Chief Operating Officer
- Ownership: 33%
- Investment: $30,000
- Background: Operations and strategy expert

**Founder 3 (CFO)**
- Role: Chief Financial Officer
- Ownership: 34%
- Investment: $40,000
- Background: Financial planning and fundraising experience

**Team Strengths:**
- All founders have prior entrepreneurial experience
- Well-balanced skill set across key functions
- Fair equity distribution
- Significant personal investment shows commitment

Would you like to see their LinkedIn profiles or compare with other founding teams?";

const FINTECH_STARTUPS: &str = "Here are FinTech startups currently raising:

**FinFlow** (Bangalore)
- Stage: Early Stage | Seed Round
- HScore: 88/100
- Target Raise: $750K - $1.5M
- Focus: Payment infrastructure for SMEs
- Key Metrics: Strong traction, 15-25% MoM growth
- Competitive Position: Unique technology stack

**PaySecure** (Mumbai)
- Stage: MVP Stage | Pre-Seed Round
- HScore: 75/100
- Target Raise: $200K - $400K
- Focus: Digital wallet solutions
- Key Metrics: Early validation, growing user base

**CryptoBank** (Delhi)
- Stage: Growth Stage | Series A
- HScore: 90/100
- Target Raise: $2M - $5M
- Focus: Crypto banking infrastructure
- Key Metrics: Strong revenue, proven PMF

Would you like detailed analysis on any of these?";

const THESIS_MATCHES: &str = "Based on your configured investment thesis, here are matching startups:

**High Matches (85%+):**
1. **Star AI** - 92% match
   - Meets: AI/ML focus, experienced founders, defensible IP
   - Stage: MVP -> Seed (aligned with your criteria)

2. **FinFlow** - 88% match
   - Meets: B2B SaaS model, strong unit economics, proven traction
   - Stage: Early -> Seed (aligned)

**Medium Matches (75-85%):**
3. **CloudSync** - 82% match
   - Meets: SaaS focus, good growth metrics
   - Gap: Earlier stage than preferred

Would you like me to adjust your thesis criteria or show more details?";

/// Responder with the built-in investor replies.
pub fn investor_assistant() -> CannedResponder {
    CannedResponder::from_pairs(
        FALLBACK,
        &[
            ("show me ai startups", AI_STARTUPS),
            ("tell me about star ai", STAR_AI),
            ("who are the founders", FOUNDERS),
            ("show me fintech startups", FINTECH_STARTUPS),
            ("what startups match my thesis", THESIS_MATCHES),
        ],
    )
}
