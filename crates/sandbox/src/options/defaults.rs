/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use crate::options::value::{
    Configuration, JsxEmit, ModuleKind, ModuleResolutionKind, OptionValue, ScriptTarget,
};

/// Build the sandbox's default compiler options.
///
/// The table doubles as the list of every option that can be read from the
/// URL query, so its keys and order matter. `is_permissive` selects the
/// looser JavaScript variant: `strictNullChecks` off, `checkJs`/`allowJs` on.
///
/// `overrides` is overlaid key by key afterwards without validation.
#[must_use]
pub fn resolve_defaults(is_permissive: bool, overrides: &Configuration) -> Configuration {
    let table: [(&str, OptionValue); 32] = [
        ("noImplicitAny", true.into()),
        ("strictNullChecks", (!is_permissive).into()),
        ("strictFunctionTypes", true.into()),
        ("strictPropertyInitialization", true.into()),
        ("strictBindCallApply", true.into()),
        ("noImplicitThis", true.into()),
        ("noImplicitReturns", true.into()),
        ("noUncheckedIndexedAccess", false.into()),
        ("useDefineForClassFields", false.into()),
        ("alwaysStrict", true.into()),
        ("allowUnreachableCode", false.into()),
        ("allowUnusedLabels", false.into()),
        ("downlevelIteration", false.into()),
        ("noEmitHelpers", false.into()),
        ("noLib", false.into()),
        ("noStrictGenericChecks", false.into()),
        ("noUnusedLocals", false.into()),
        ("noUnusedParameters", false.into()),
        ("esModuleInterop", true.into()),
        ("preserveConstEnums", false.into()),
        ("removeComments", false.into()),
        ("skipLibCheck", false.into()),
        ("checkJs", is_permissive.into()),
        ("allowJs", is_permissive.into()),
        ("declaration", true.into()),
        ("importHelpers", false.into()),
        ("experimentalDecorators", true.into()),
        ("emitDecoratorMetadata", true.into()),
        ("moduleResolution", ModuleResolutionKind::NodeJs.into()),
        ("target", ScriptTarget::Es2017.into()),
        ("jsx", JsxEmit::React.into()),
        ("module", ModuleKind::EsNext.into()),
    ];

    let mut settings: Configuration = table.into_iter().collect();
    settings.merge(overrides);
    settings
}
