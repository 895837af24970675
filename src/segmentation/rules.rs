//! Sentence boundary rules.
//!
//! A rule is data: a trigger predicate, an offset, and a target predicate.
//! Whenever the trigger matches token `i` and the target matches token
//! `i + offset`, the target is flagged as a sentence start. Rules only ever
//! set flags, so appending a rule never removes a boundary.

use crate::config::SegmentationConfig;
use crate::doc::Token;
use crate::error::{LexicaError, Result};
use std::fmt;
use std::sync::Arc;

/// Default end-of-sentence punctuation.
pub const DEFAULT_TERMINATORS: &[&str] = &[".", "!", "?"];

/// A test applied to a single token.
#[derive(Clone)]
pub enum TokenPredicate {
    /// Matches every token.
    Any,
    /// Token text equals one of the given strings.
    TextIn(Vec<String>),
    /// Token text begins with a newline.
    StartsWithNewline,
    /// Token text is whitespace only.
    IsSpace,
    /// Negation.
    Not(Box<TokenPredicate>),
    /// Every inner predicate matches.
    All(Vec<TokenPredicate>),
    /// Arbitrary test.
    Custom(Arc<dyn Fn(&Token) -> bool + Send + Sync>),
}

impl TokenPredicate {
    /// Matches tokens whose text is exactly `text`.
    pub fn text(text: impl Into<String>) -> Self {
        TokenPredicate::TextIn(vec![text.into()])
    }

    /// Matches tokens whose text is any of `texts`.
    pub fn text_in<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TokenPredicate::TextIn(texts.into_iter().map(Into::into).collect())
    }

    /// Wraps a closure.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Token) -> bool + Send + Sync + 'static,
    {
        TokenPredicate::Custom(Arc::new(f))
    }

    /// Negates this predicate.
    pub fn negate(self) -> Self {
        TokenPredicate::Not(Box::new(self))
    }

    /// Matches when both this and `other` match.
    pub fn and(self, other: TokenPredicate) -> Self {
        match self {
            TokenPredicate::All(mut inner) => {
                inner.push(other);
                TokenPredicate::All(inner)
            }
            first => TokenPredicate::All(vec![first, other]),
        }
    }

    /// Evaluates the predicate.
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            TokenPredicate::Any => true,
            TokenPredicate::TextIn(texts) => texts.iter().any(|t| *t == token.text),
            TokenPredicate::StartsWithNewline => token.starts_with_newline(),
            TokenPredicate::IsSpace => token.flags.is_space,
            TokenPredicate::Not(inner) => !inner.matches(token),
            TokenPredicate::All(inner) => inner.iter().all(|p| p.matches(token)),
            TokenPredicate::Custom(f) => f(token),
        }
    }
}

impl fmt::Debug for TokenPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenPredicate::Any => write!(f, "Any"),
            TokenPredicate::TextIn(texts) => f.debug_tuple("TextIn").field(texts).finish(),
            TokenPredicate::StartsWithNewline => write!(f, "StartsWithNewline"),
            TokenPredicate::IsSpace => write!(f, "IsSpace"),
            TokenPredicate::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
            TokenPredicate::All(inner) => f.debug_tuple("All").field(inner).finish(),
            TokenPredicate::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// A sentence boundary rule.
#[derive(Debug, Clone)]
pub struct BoundaryRule {
    name: String,
    trigger: TokenPredicate,
    offset: usize,
    target: TokenPredicate,
}

impl BoundaryRule {
    /// Creates a rule flagging the token `offset` positions after any token
    /// matching `trigger`.
    pub fn new(name: impl Into<String>, trigger: TokenPredicate, offset: usize) -> Self {
        Self {
            name: name.into(),
            trigger,
            offset,
            target: TokenPredicate::Any,
        }
    }

    /// Restricts which tokens may be flagged.
    pub fn with_target(mut self, target: TokenPredicate) -> Self {
        self.target = target;
        self
    }

    /// The default rule: the first token after a run of `.`, `!` or `?` that
    /// is neither whitespace nor another terminator.
    pub fn punctuation() -> Self {
        Self::terminators(DEFAULT_TERMINATORS.iter().copied())
    }

    /// Like [`punctuation`](Self::punctuation) with custom terminators.
    pub fn terminators<I, S>(terminators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terminators = TokenPredicate::text_in(terminators);
        let target = TokenPredicate::IsSpace
            .negate()
            .and(terminators.clone().negate());
        Self::new("punctuation", terminators, 1).with_target(target)
    }

    /// Flags the token right after every `;`.
    pub fn semicolon() -> Self {
        Self::new("semicolon", TokenPredicate::text(";"), 1)
    }

    /// Rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distance from trigger to flagged token.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Applies the rule over `tokens`, returning how many flags it newly set.
    ///
    /// Targets past the end of the sequence are ignored.
    pub fn apply(&self, tokens: &mut [Token]) -> usize {
        let mut flagged = 0;
        for i in 0..tokens.len() {
            if !self.trigger.matches(&tokens[i]) {
                continue;
            }
            let Some(target) = i.checked_add(self.offset).and_then(|j| tokens.get_mut(j)) else {
                continue;
            };
            if !target.is_sent_start() && self.target.matches(target) {
                target.set_sent_start(true);
                flagged += 1;
            }
        }
        flagged
    }
}

/// An ordered, closed collection of boundary rules.
///
/// Built with [`RuleSetBuilder`]; once built no rule can be added, so the
/// rule order seen by boundary marking is fixed.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<BoundaryRule>,
}

impl Default for RuleSet {
    /// Just the default punctuation rule.
    fn default() -> Self {
        Self {
            rules: vec![BoundaryRule::punctuation()],
        }
    }
}

impl RuleSet {
    /// Starts an empty builder.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Builds the punctuation rule set described by `config`.
    pub fn from_config(config: &SegmentationConfig) -> Result<Self> {
        let mut builder =
            Self::builder().rule(BoundaryRule::terminators(config.terminators.iter().cloned()));
        for trigger_rule in &config.extra_triggers {
            builder = builder.rule(BoundaryRule::new(
                trigger_rule.name.clone(),
                TokenPredicate::text_in(trigger_rule.trigger.iter().cloned()),
                trigger_rule.offset,
            ));
        }
        builder.build()
    }

    /// Rules in registration order.
    pub fn rules(&self) -> &[BoundaryRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Checks if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies every rule in order, returning the number of flags set.
    pub(crate) fn apply(&self, tokens: &mut [Token]) -> usize {
        self.rules.iter().map(|rule| rule.apply(tokens)).sum()
    }
}

/// Collects rules in order before they are frozen into a [`RuleSet`].
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    rules: Vec<BoundaryRule>,
}

impl RuleSetBuilder {
    /// Starts from the default punctuation rule.
    pub fn with_defaults() -> Self {
        Self {
            rules: RuleSet::default().rules,
        }
    }

    /// Appends a rule.
    pub fn rule(mut self, rule: BoundaryRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Closes registration.
    ///
    /// Rules must flag a later token: an offset of 0 is rejected.
    pub fn build(self) -> Result<RuleSet> {
        if let Some(rule) = self.rules.iter().find(|r| r.offset == 0) {
            return Err(LexicaError::Config(format!(
                "rule '{}' must flag a later token (offset >= 1)",
                rule.name
            )));
        }
        Ok(RuleSet { rules: self.rules })
    }
}
