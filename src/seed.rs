use crate::models::{AnswerLabel, Category, Difficulty};

pub struct SeedQuestion {
    pub category: Category,
    pub topic: &'static str,
    pub difficulty: Difficulty,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct: AnswerLabel,
}

const fn q(
    category: Category,
    topic: &'static str,
    difficulty: Difficulty,
    prompt: &'static str,
    options: [&'static str; 4],
    correct: AnswerLabel,
) -> SeedQuestion {
    SeedQuestion {
        category,
        topic,
        difficulty,
        prompt,
        options,
        correct,
    }
}

use crate::models::AnswerLabel::{A, B, C, D};
use crate::models::Category::{Finance, Macro, Micro};
use crate::models::Difficulty::{Easy, Hard, Medium};

// Inserted into an empty database on first init.
pub const QUESTIONS: &[SeedQuestion] = &[
    // Microeconomics
    q(
        Micro,
        "Supply and Demand",
        Easy,
        "What happens to the market price when demand increases?",
        ["It falls", "It rises", "Nothing changes", "Supply falls"],
        B,
    ),
    q(
        Micro,
        "Supply and Demand",
        Easy,
        "What does the law of supply state?",
        [
            "Higher price, lower quantity supplied",
            "Higher price, higher quantity supplied",
            "Lower price, higher quantity supplied",
            "Price and supply are unrelated",
        ],
        B,
    ),
    q(
        Micro,
        "Costs",
        Easy,
        "Costs that do not change with the level of output are called:",
        ["Variable costs", "Fixed costs", "Marginal costs", "Total costs"],
        B,
    ),
    q(
        Micro,
        "Markets",
        Easy,
        "Under perfect competition, firms are:",
        ["Few and large", "Many and small", "A single seller", "Two dominant firms"],
        B,
    ),
    q(
        Micro,
        "Elasticity",
        Easy,
        "A necessity usually has demand that is:",
        ["Elastic", "Inelastic", "Unit elastic", "Perfectly elastic"],
        B,
    ),
    q(
        Micro,
        "Supply and Demand",
        Medium,
        "The point where supply and demand cross is called:",
        ["Break-even point", "Market equilibrium", "Critical point", "Economic intersection"],
        B,
    ),
    q(
        Micro,
        "Elasticity",
        Medium,
        "A good with a price elasticity greater than 1 is considered:",
        ["Elastic", "Inelastic", "Unit elastic", "Complementary"],
        A,
    ),
    q(
        Micro,
        "Production",
        Medium,
        "Marginal cost is:",
        [
            "The cost of producing one additional unit",
            "Total cost divided by units",
            "The cost of fixed factors",
            "The opportunity cost",
        ],
        A,
    ),
    q(
        Micro,
        "Competition",
        Medium,
        "A monopoly is characterized by:",
        ["Many sellers", "A single seller", "A few sellers", "Differentiated products"],
        B,
    ),
    q(
        Micro,
        "Utility",
        Medium,
        "The law of diminishing marginal utility states that:",
        [
            "Total utility always rises",
            "Each additional unit gives less utility",
            "Utility is constant",
            "Marginal utility rises",
        ],
        B,
    ),
    q(
        Micro,
        "Elasticity",
        Hard,
        "Cross-price elasticity of demand measures the change in quantity demanded caused by:",
        [
            "A change in the good's own price",
            "A change in income",
            "A change in the price of a related good",
            "A change in the quantity supplied",
        ],
        C,
    ),
    q(
        Micro,
        "Consumer Theory",
        Hard,
        "An indifference curve shows combinations of goods that:",
        [
            "Maximize utility",
            "Give the same utility",
            "Are affordable",
            "Are optimal",
        ],
        B,
    ),
    q(
        Micro,
        "Market Failures",
        Hard,
        "A positive externality exists when:",
        [
            "Social costs exceed private costs",
            "Social benefits exceed private benefits",
            "There is no government intervention",
            "The market is efficient",
        ],
        B,
    ),
    q(
        Micro,
        "Game Theory",
        Hard,
        "In the Cournot model, firms compete on:",
        ["Price", "Quantity", "Quality", "Advertising"],
        B,
    ),
    q(
        Micro,
        "Game Theory",
        Hard,
        "The prisoner's dilemma shows that:",
        [
            "Cooperation is always optimal",
            "Individually rational choices may be socially suboptimal",
            "Games always have a winner",
            "Competition is always efficient",
        ],
        B,
    ),
    // Macroeconomics
    q(
        Macro,
        "GDP",
        Easy,
        "GDP measures:",
        [
            "Total government debt",
            "The value of final goods and services produced in a country",
            "The money supply",
            "Average household income",
        ],
        B,
    ),
    q(
        Macro,
        "Inflation",
        Easy,
        "Inflation is:",
        [
            "A sustained fall in prices",
            "A sustained rise in the general price level",
            "A rise in unemployment",
            "A fall in output",
        ],
        B,
    ),
    q(
        Macro,
        "Fiscal Policy",
        Easy,
        "When the government spends more than it collects, there is a:",
        ["Fiscal surplus", "Fiscal deficit", "Balanced budget", "Austerity plan"],
        B,
    ),
    q(
        Macro,
        "Money",
        Easy,
        "The main functions of money are:",
        [
            "Only a medium of exchange",
            "Medium of exchange, unit of account and store of value",
            "Only a store of value",
            "Only a unit of account",
        ],
        B,
    ),
    q(
        Macro,
        "Unemployment",
        Easy,
        "A person without a job who is actively looking for one is:",
        ["Inactive", "Unemployed", "Underemployed", "Retired"],
        B,
    ),
    q(
        Macro,
        "Business Cycle",
        Medium,
        "The expansion phase of the business cycle is marked by:",
        ["High unemployment", "GDP growth", "Low inflation", "Recession"],
        B,
    ),
    q(
        Macro,
        "Monetary Policy",
        Medium,
        "The main job of a central bank is to:",
        [
            "Lend to households",
            "Run monetary policy",
            "Compete with commercial banks",
            "Issue shares",
        ],
        B,
    ),
    q(
        Macro,
        "International Trade",
        Medium,
        "A devaluation of the domestic currency usually:",
        [
            "Reduces exports",
            "Increases exports",
            "Does not affect trade",
            "Only affects tourism",
        ],
        B,
    ),
    q(
        Macro,
        "International Trade",
        Medium,
        "A trade deficit means that:",
        [
            "Imports exceed exports",
            "Exports exceed imports",
            "Trade is balanced",
            "The country does not trade",
        ],
        A,
    ),
    q(
        Macro,
        "Monetary Policy",
        Medium,
        "Raising the policy interest rate is generally used to:",
        [
            "Stimulate borrowing",
            "Reduce inflationary pressure",
            "Weaken the currency",
            "Increase the deficit",
        ],
        B,
    ),
    q(
        Macro,
        "Exchange Rates",
        Hard,
        "Purchasing power parity suggests that:",
        [
            "Exchange rates reflect inflation differences",
            "Exchange rates are always fixed",
            "Inflation does not affect exchange rates",
            "Markets are always efficient",
        ],
        A,
    ),
    q(
        Macro,
        "Inflation",
        Hard,
        "The short-run Phillips curve relates:",
        [
            "Inflation and unemployment",
            "Interest and investment",
            "Spending and output",
            "Saving and consumption",
        ],
        A,
    ),
    q(
        Macro,
        "Fiscal Policy",
        Hard,
        "Keynes argued that during a recession the government should:",
        [
            "Cut public spending",
            "Increase public spending",
            "Keep spending constant",
            "Only lower taxes",
        ],
        B,
    ),
    q(
        Macro,
        "Monetary Policy",
        Hard,
        "A liquidity trap occurs when:",
        [
            "Banks refuse to lend",
            "Interest rates are near zero and monetary policy loses traction",
            "The money supply shrinks",
            "Inflation is very high",
        ],
        B,
    ),
    q(
        Macro,
        "GDP",
        Hard,
        "The GDP deflator is computed as:",
        [
            "Real GDP divided by nominal GDP",
            "Nominal GDP divided by real GDP, times 100",
            "CPI minus inflation",
            "GDP divided by population",
        ],
        B,
    ),
    // Finance
    q(
        Finance,
        "Interest",
        Easy,
        "Compound interest is calculated on:",
        [
            "The initial principal only",
            "The principal plus accumulated interest",
            "The interest only",
            "A fixed amount each year",
        ],
        B,
    ),
    q(
        Finance,
        "Investments",
        Easy,
        "A share of stock represents:",
        ["Company debt", "Ownership in the company", "A loan", "A derivative"],
        B,
    ),
    q(
        Finance,
        "Savings",
        Easy,
        "Inflation hurts savers because it:",
        [
            "Raises purchasing power",
            "Reduces purchasing power",
            "Does not affect purchasing power",
            "Only affects borrowers",
        ],
        B,
    ),
    q(
        Finance,
        "Risk",
        Easy,
        "Diversification aims to:",
        ["Increase risk", "Reduce risk", "Guarantee returns", "Avoid taxes"],
        B,
    ),
    q(
        Finance,
        "Bonds",
        Easy,
        "A bond is:",
        [
            "An ownership stake",
            "A debt instrument",
            "A savings account",
            "A commodity",
        ],
        B,
    ),
    q(
        Finance,
        "Bonds",
        Medium,
        "When market interest rates rise, existing bond prices:",
        ["Rise", "Fall", "Stay the same", "Double"],
        B,
    ),
    q(
        Finance,
        "Financial Ratios",
        Medium,
        "The current ratio measures:",
        [
            "Profitability",
            "Leverage",
            "The ability to pay short-term obligations",
            "Efficiency",
        ],
        C,
    ),
    q(
        Finance,
        "Investments",
        Medium,
        "Technical analysis is based on:",
        [
            "Financial statements",
            "Historical price patterns",
            "Economic fundamentals",
            "Market news",
        ],
        B,
    ),
    q(
        Finance,
        "Valuation",
        Medium,
        "Net present value discounts future cash flows using:",
        [
            "The inflation rate only",
            "A required rate of return",
            "The tax rate",
            "The dividend yield",
        ],
        B,
    ),
    q(
        Finance,
        "Risk",
        Medium,
        "Beta measures a stock's:",
        [
            "Dividend growth",
            "Sensitivity to market movements",
            "Liquidity",
            "Credit rating",
        ],
        B,
    ),
    q(
        Finance,
        "Risk",
        Hard,
        "Value at Risk (VaR) estimates:",
        [
            "The maximum expected return",
            "The maximum expected loss over a period at a confidence level",
            "Historical volatility",
            "The average return",
        ],
        B,
    ),
    q(
        Finance,
        "Valuation",
        Hard,
        "The CAPM expected return equals the risk-free rate plus:",
        [
            "Beta times the market risk premium",
            "The dividend yield",
            "The inflation rate",
            "Standard deviation times beta",
        ],
        A,
    ),
    q(
        Finance,
        "Derivatives",
        Hard,
        "A call option gives the holder the right to:",
        [
            "Sell an asset at a set price",
            "Buy an asset at a set price",
            "Receive fixed coupons",
            "Vote at shareholder meetings",
        ],
        B,
    ),
    q(
        Finance,
        "Bonds",
        Hard,
        "Duration of a bond measures:",
        [
            "Time until the first coupon",
            "Price sensitivity to interest rate changes",
            "The default probability",
            "The coupon rate",
        ],
        B,
    ),
    q(
        Finance,
        "Leverage",
        Hard,
        "Financial leverage:",
        [
            "Reduces risk",
            "Amplifies gains and losses",
            "Only amplifies gains",
            "Only amplifies losses",
        ],
        B,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn covers_every_category_and_difficulty() {
        for cat in Category::ALL {
            for diff in Difficulty::ALL {
                assert!(
                    QUESTIONS
                        .iter()
                        .any(|s| s.category == cat && s.difficulty == diff),
                    "missing {:?} / {:?}",
                    cat,
                    diff
                );
            }
        }
    }

    #[test]
    fn prompts_are_unique() {
        let prompts: HashSet<&str> = QUESTIONS.iter().map(|s| s.prompt).collect();
        assert_eq!(prompts.len(), QUESTIONS.len());
    }

    #[test]
    fn options_are_distinct_and_non_empty() {
        for seed in QUESTIONS {
            let options: HashSet<&str> = seed.options.iter().copied().collect();
            assert_eq!(options.len(), 4, "duplicate option in '{}'", seed.prompt);
            assert!(seed.options.iter().all(|o| !o.is_empty()));
        }
    }
}
