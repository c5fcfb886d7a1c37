//! The authoritative enumeration of node-kind tags.
//!
//! These tables are the ground truth for what the grammars can produce. They
//! are maintained by hand, independently of the builder registry's key set,
//! precisely so the coverage audit can catch a missing or orphaned
//! registration — deriving one side from the other would make the audit
//! vacuous.
//!
//! The tag namespace is flat; grouping below exists only for human
//! navigation. Each table lists its grammar's kinds in the order the grammar
//! definition declares them.

use once_cell::sync::Lazy;

// ============================================================================
// PER-GRAMMAR TAG TABLES
// ============================================================================

/// Kinds shared by every grammar: comment nodes, plus the test-support
/// wrapper node that harnesses use to give a fixture a synthetic parent.
pub const COMMON: &[&str] = &[
    "CommentBlock",
    "CommentLine",
    "MockParent",
];

/// The script grammar, including its embedded JSX and regular-expression
/// sub-grammars.
pub const SCRIPT: &[&str] = &[
    // core
    "JSDirective",
    "JSInterpreterDirective",
    "JSRoot",
    // statements
    "JSBlockStatement",
    "JSBreakStatement",
    "JSContinueStatement",
    "JSDebuggerStatement",
    "JSDoWhileStatement",
    "JSEmptyStatement",
    "JSExpressionStatement",
    "JSForInStatement",
    "JSForOfStatement",
    "JSForStatement",
    "JSFunctionDeclaration",
    "JSIfStatement",
    "JSLabeledStatement",
    "JSReturnStatement",
    "JSSwitchStatement",
    "JSThrowStatement",
    "JSTryStatement",
    "JSVariableDeclarationStatement",
    "JSWhileStatement",
    "JSWithStatement",
    // expressions
    "JSArrayExpression",
    "JSArrowFunctionExpression",
    "JSAssignmentExpression",
    "JSAwaitExpression",
    "JSBinaryExpression",
    "JSCallExpression",
    "JSConditionalExpression",
    "JSDoExpression",
    "JSFunctionExpression",
    "JSLogicalExpression",
    "JSMemberExpression",
    "JSMetaProperty",
    "JSNewExpression",
    "JSOptionalCallExpression",
    "JSReferenceIdentifier",
    "JSSequenceExpression",
    "JSSuper",
    "JSTaggedTemplateExpression",
    "JSThisExpression",
    "JSUnaryExpression",
    "JSUpdateExpression",
    "JSYieldExpression",
    // literals
    "JSBigIntLiteral",
    "JSBooleanLiteral",
    "JSNullLiteral",
    "JSNumericLiteral",
    "JSRegExpLiteral",
    "JSStringLiteral",
    "JSTemplateLiteral",
    // objects
    "JSComputedPropertyKey",
    "JSObjectExpression",
    "JSObjectMethod",
    "JSObjectProperty",
    "JSSpreadProperty",
    "JSStaticPropertyKey",
    // classes
    "JSClassDeclaration",
    "JSClassExpression",
    "JSClassHead",
    "JSClassMethod",
    "JSClassPrivateMethod",
    "JSClassPrivateProperty",
    "JSClassProperty",
    "JSClassPropertyMeta",
    "JSPrivateName",
    // assignment and binding patterns
    "JSAssignmentArrayPattern",
    "JSAssignmentAssignmentPattern",
    "JSAssignmentIdentifier",
    "JSAssignmentObjectPattern",
    "JSAssignmentObjectPatternProperty",
    "JSBindingArrayPattern",
    "JSBindingAssignmentPattern",
    "JSBindingIdentifier",
    "JSBindingObjectPattern",
    "JSBindingObjectPatternProperty",
    "JSPatternMeta",
    // modules
    "JSExportAllDeclaration",
    "JSExportDefaultDeclaration",
    "JSExportDefaultSpecifier",
    "JSExportExternalDeclaration",
    "JSExportExternalSpecifier",
    "JSExportLocalDeclaration",
    "JSExportLocalSpecifier",
    "JSExportNamespaceSpecifier",
    "JSImportCall",
    "JSImportDeclaration",
    "JSImportDefaultSpecifier",
    "JSImportNamespaceSpecifier",
    "JSImportSpecifier",
    "JSImportSpecifierLocal",
    // auxiliary
    "JSArrayHole",
    "JSCatchClause",
    "JSComputedMemberProperty",
    "JSFunctionHead",
    "JSIdentifier",
    "JSSpreadElement",
    "JSStaticMemberProperty",
    "JSSwitchCase",
    "JSTemplateElement",
    "JSVariableDeclaration",
    "JSVariableDeclarator",
    // flow interop artifact still emitted by the parser
    "JSAmbiguousFlowTypeCastExpression",
    // regular-expression sub-grammar
    "JSRegExpAlternation",
    "JSRegExpAnyCharacter",
    "JSRegExpCharacter",
    "JSRegExpCharSet",
    "JSRegExpCharSetRange",
    "JSRegExpControlCharacter",
    "JSRegExpDigitCharacter",
    "JSRegExpEndCharacter",
    "JSRegExpGroupCapture",
    "JSRegExpGroupNonCapture",
    "JSRegExpNamedBackReference",
    "JSRegExpNonDigitCharacter",
    "JSRegExpNonWhiteSpaceCharacter",
    "JSRegExpNonWordBoundaryCharacter",
    "JSRegExpNonWordCharacter",
    "JSRegExpNumericBackReference",
    "JSRegExpQuantified",
    "JSRegExpStartCharacter",
    "JSRegExpSubExpression",
    "JSRegExpWhiteSpaceCharacter",
    "JSRegExpWordBoundaryCharacter",
    "JSRegExpWordCharacter",
    // jsx
    "JSXAttribute",
    "JSXElement",
    "JSXEmptyExpression",
    "JSXExpressionContainer",
    "JSXFragment",
    "JSXIdentifier",
    "JSXMemberExpression",
    "JSXNamespacedName",
    "JSXReferenceIdentifier",
    "JSXSpreadAttribute",
    "JSXSpreadChild",
    "JSXText",
];

/// The typed superset of the script grammar.
pub const TYPED: &[&str] = &[
    "TSAnyKeywordTypeAnnotation",
    "TSArrayType",
    "TSAsExpression",
    "TSAssignmentAsExpression",
    "TSAssignmentNonNullExpression",
    "TSAssignmentTypeAssertion",
    "TSBigIntKeywordTypeAnnotation",
    "TSBooleanKeywordTypeAnnotation",
    "TSBooleanLiteralTypeAnnotation",
    "TSCallSignatureDeclaration",
    "TSConditionalType",
    "TSConstructorType",
    "TSConstructSignatureDeclaration",
    "TSDeclareFunction",
    "TSDeclareMethod",
    "TSEmptyKeywordTypeAnnotation",
    "TSEnumDeclaration",
    "TSEnumMember",
    "TSExportAssignment",
    "TSExpressionWithTypeArguments",
    "TSExternalModuleReference",
    "TSFunctionType",
    "TSImportEqualsDeclaration",
    "TSImportType",
    "TSIndexedAccessType",
    "TSIndexSignature",
    "TSInferType",
    "TSInterfaceBody",
    "TSInterfaceDeclaration",
    "TSIntersectionTypeAnnotation",
    "TSMappedType",
    "TSMethodSignature",
    "TSMixedKeywordTypeAnnotation",
    "TSModuleBlock",
    "TSModuleDeclaration",
    "TSNamespaceExportDeclaration",
    "TSNeverKeywordTypeAnnotation",
    "TSNonNullExpression",
    "TSNullKeywordTypeAnnotation",
    "TSNumberKeywordTypeAnnotation",
    "TSNumericLiteralTypeAnnotation",
    "TSObjectKeywordTypeAnnotation",
    "TSObjectTypeAnnotation",
    "TSParenthesizedType",
    "TSPropertySignature",
    "TSQualifiedName",
    "TSSignatureDeclarationMeta",
    "TSStringKeywordTypeAnnotation",
    "TSStringLiteralTypeAnnotation",
    "TSSymbolKeywordTypeAnnotation",
    "TSTemplateLiteralTypeAnnotation",
    "TSThisType",
    "TSTupleElement",
    "TSTupleType",
    "TSTypeAlias",
    "TSTypeAssertion",
    "TSTypeOperator",
    "TSTypeParameter",
    "TSTypeParameterDeclaration",
    "TSTypeParameterInstantiation",
    "TSTypePredicate",
    "TSTypeQuery",
    "TSTypeReference",
    "TSUndefinedKeywordTypeAnnotation",
    "TSUnionTypeAnnotation",
    "TSUnknownKeywordTypeAnnotation",
    "TSVoidKeywordTypeAnnotation",
];

/// The markup grammar.
pub const MARKUP: &[&str] = &[
    "HTMLAttribute",
    "HTMLDoctypeTag",
    "HTMLElement",
    "HTMLIdentifier",
    "HTMLRoot",
    "HTMLString",
    "HTMLText",
];

/// The stylesheet grammar.
pub const STYLESHEET: &[&str] = &[
    // core
    "CSSRoot",
    "CSSRuleDeclaration",
    "CSSRulesetStatement",
    // at-statements
    "CSSCharSetAtStatement",
    "CSSCounterStyleAtStatement",
    "CSSDocumentAtStatement",
    "CSSFontFaceAtStatement",
    "CSSImportAtStatement",
    "CSSKeyframesAtStatement",
    "CSSMediaAtStatement",
    "CSSNamespaceAtStatement",
    "CSSPageAtStatement",
    "CSSSupportsAtStatement",
    "CSSViewportAtStatement",
    // keyframes
    "CSSKeyframesFromKeyword",
    "CSSKeyframesRuleDeclaration",
    "CSSKeyframesToKeyword",
    // selectors
    "CSSSelectorAttribute",
    "CSSSelectorChain",
    "CSSSelectorClass",
    "CSSSelectorCombinator",
    "CSSSelectorId",
    "CSSSelectorPseudoClass",
    "CSSSelectorPseudoElementSelector",
    "CSSSelectorTag",
    "CSSSelectorUniversal",
    // value types
    "CSSAnglePercentageType",
    "CSSAngleType",
    "CSSBasicShapeType",
    "CSSBlendModeType",
    "CSSDimensionType",
    "CSSFrequencyPercentageType",
    "CSSFrequencyType",
    "CSSGradientType",
    "CSSIdentifierType",
    "CSSImageType",
    "CSSIntegerType",
    "CSSLengthPercentageType",
    "CSSLengthType",
    "CSSNumberType",
    "CSSPercentageType",
    "CSSRatioType",
    "CSSResolutionType",
    "CSSShapeType",
    "CSSStringType",
    "CSSTimePercentageType",
    "CSSTimeType",
    "CSSTransformFunctionType",
    "CSSURLType",
];

// ============================================================================
// GRAMMAR CLASSIFICATION
// ============================================================================

/// The embedded grammar a kind tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    Common,
    Script,
    Typed,
    Markup,
    Stylesheet,
}

impl Grammar {
    /// Every grammar, in audit/reporting order.
    pub const ALL: [Grammar; 5] = [
        Grammar::Common,
        Grammar::Script,
        Grammar::Typed,
        Grammar::Markup,
        Grammar::Stylesheet,
    ];

    /// Stable lowercase name, used by the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Grammar::Common => "common",
            Grammar::Script => "script",
            Grammar::Typed => "typed",
            Grammar::Markup => "markup",
            Grammar::Stylesheet => "stylesheet",
        }
    }

    /// Parses the lowercase name back into a grammar.
    pub fn from_name(name: &str) -> Option<Self> {
        Grammar::ALL.into_iter().find(|g| g.name() == name)
    }

    /// The tag table for this grammar.
    pub fn kinds(self) -> &'static [&'static str] {
        match self {
            Grammar::Common => COMMON,
            Grammar::Script => SCRIPT,
            Grammar::Typed => TYPED,
            Grammar::Markup => MARKUP,
            Grammar::Stylesheet => STYLESHEET,
        }
    }
}

// ============================================================================
// WHOLE-UNIVERSE VIEWS
// ============================================================================

static ALL: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut all = Vec::with_capacity(
        COMMON.len() + SCRIPT.len() + TYPED.len() + MARKUP.len() + STYLESHEET.len(),
    );
    for grammar in Grammar::ALL {
        all.extend_from_slice(grammar.kinds());
    }
    all
});

/// Every legal kind tag across all grammars.
///
/// # Examples
///
/// ```rust
/// use galley::syntax::kind;
/// assert!(kind::all().contains(&"JSBinaryExpression"));
/// assert!(kind::all().contains(&"CSSRoot"));
/// ```
pub fn all() -> &'static [&'static str] {
    &ALL
}

/// True when `tag` names a kind some grammar can produce.
pub fn is_known(tag: &str) -> bool {
    grammar_of(tag).is_some()
}

/// Classifies a tag into its grammar, or `None` for tags no grammar declares.
///
/// # Examples
///
/// ```rust
/// use galley::syntax::kind::{self, Grammar};
/// assert_eq!(kind::grammar_of("HTMLElement"), Some(Grammar::Markup));
/// assert_eq!(kind::grammar_of("JSXElement"), Some(Grammar::Script));
/// assert_eq!(kind::grammar_of("NoSuchKind"), None);
/// ```
pub fn grammar_of(tag: &str) -> Option<Grammar> {
    Grammar::ALL
        .into_iter()
        .find(|grammar| grammar.kinds().contains(&tag))
}

// ============================================================================
// TESTS
// ============================================================================
