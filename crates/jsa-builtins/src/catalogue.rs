//! The standard-library catalogue.
//!
//! Mostly data: names, parameter lists, fixed results and documentation for
//! the global functions, constructors and prototype methods the analyzer
//! knows about. The only behavior lives in the specialized bindings
//! (`forEach`, `defineProperty`, `defineProperties`, `require`).
//!
//! Fixed results of unknown contents use the type representatives
//! `ANY_STRING`, `ANY_NUMBER` and `ANY_BOOLEAN`. They never fold to a
//! constant, so a stub's string result cannot name a module or a property.

use crate::binding::Binding;
use crate::namespace::NamespaceBuilder;
use crate::options::BuiltinOptions;
use crate::specialized;
use jsa_values::{ObjectId, ValueId};
use std::f64::consts;

/// Handles produced while building the catalogue.
pub(crate) struct CatalogueHandles {
    pub global_object: ObjectId,
    pub object_prototype: ObjectId,
    pub number_prototype: ObjectId,
    pub string_prototype: ObjectId,
    pub boolean_prototype: ObjectId,
    pub function_prototype: ObjectId,
    pub array_function: ObjectId,
}

/// Values the catalogue refers to over and over.
struct Common {
    string: ValueId,
    number: ValueId,
    boolean: ValueId,
    object_prototype: ObjectId,
}

pub(crate) fn build(builder: &mut NamespaceBuilder<'_>, options: &BuiltinOptions) -> CatalogueHandles {
    let store = builder.store();

    // Builtin functions allocated from here on link to this prototype.
    let function_prototype = builder.bootstrap_function_prototype(function_prototype_binding());
    let object_prototype = builder.object(None, object_prototype_members());
    store.set_prototype(function_prototype, Some(object_prototype));

    let common = Common {
        string: ValueId::ANY_STRING,
        number: ValueId::ANY_NUMBER,
        boolean: ValueId::ANY_BOOLEAN,
        object_prototype,
    };

    let array = array_function(builder, &common);
    let (boolean, boolean_prototype) = boolean_function(builder, &common);
    let (number, number_prototype) = number_function(builder, &common);
    let (string, string_prototype) = string_function(builder, &common);
    let function = builder.function(
        Binding::stub("Function")
            .with_members([Binding::member("prototype", store.object_value(function_prototype))]),
    );
    let object = object_function(builder, &common);
    let date = date_function(builder, &common);
    let regexp = regexp_function(builder, &common);
    let error = error_function(builder, &common);
    let json = json_object(builder, &common);
    let math = math_object(builder, &common);

    let named_error = |builder: &mut NamespaceBuilder<'_>, name: &str| {
        Binding::member(name, named_error_function(builder, &common, name))
    };

    let mut globals = vec![
        Binding::member("Array", store.object_value(array)),
        Binding::member("Boolean", boolean),
        Binding::member("Date", date),
        Binding::member("Error", error),
        named_error(builder, "EvalError"),
        Binding::member("Function", function),
        Binding::member("Infinity", store.number(f64::INFINITY)),
        Binding::member("JSON", json),
        Binding::member("Math", math),
    ];
    // The catalogue lists `Infinity` a second time, bound to NaN; the later
    // entry wins. Without the legacy override the entry gets its own name.
    let nan = store.number(f64::NAN);
    if options.legacy_infinity_override {
        globals.push(Binding::member("Infinity", nan));
    } else {
        globals.push(Binding::member("NaN", nan));
    }
    globals.extend([
        Binding::member("Number", number),
        Binding::member("Object", object),
        named_error(builder, "RangeError"),
        named_error(builder, "ReferenceError"),
        Binding::member("RegExp", regexp),
        Binding::member("String", string),
        named_error(builder, "SyntaxError"),
        named_error(builder, "TypeError"),
        named_error(builder, "URIError"),
    ]);
    globals.extend(global_functions(&common));
    globals.push(Binding::member("undefined", ValueId::UNDEFINED));
    globals.push(require_binding(options));

    let global_object = builder.object(Some(object_prototype), globals);
    let global_value = store.object_value(global_object);
    for alias in &options.global_aliases {
        builder.alias(global_object, alias, global_value);
    }

    CatalogueHandles {
        global_object,
        object_prototype,
        number_prototype,
        string_prototype,
        boolean_prototype,
        function_prototype,
        array_function: array,
    }
}

// =============================================================================
// Object and Function
// =============================================================================

fn function_prototype_binding() -> Binding {
    Binding::returning("Empty", ValueId::UNDEFINED).with_members([
        Binding::stub("apply")
            .with_doc("Calls the function, substituting the specified object for the this value of the function, and the specified array for the arguments of the function.")
            .with_param("thisArg", "The object to be used as the this object.")
            .with_param("argArray", "A set of arguments to be passed to the function."),
        Binding::stub("bind")
            .with_doc("For a given function, creates a bound function that has the same body as the original function.\nThe this object of the bound function is associated with the specified object, and has the specified initial parameters.")
            .with_param("thisArg", "An object to which the this keyword can refer inside the new function.")
            .with_param("argArray", "A list of arguments to be passed to the new function."),
        Binding::stub("call")
            .with_doc("Calls a method of an object, substituting another object for the current object.")
            .with_param("thisArg", "The object to be used as the current object.")
            .with_param("argArray", "A list of arguments to be passed to the method."),
        Binding::stub("constructor"),
        Binding::returning("toString", ValueId::ANY_STRING),
    ])
}

fn object_prototype_members() -> Vec<Binding> {
    vec![
        Binding::stub("constructor"),
        Binding::returning("hasOwnProperty", ValueId::ANY_BOOLEAN)
            .with_doc("Determines whether an object has a property with the specified name.")
            .with_param("v", "A property name."),
        Binding::returning("isPrototypeOf", ValueId::ANY_BOOLEAN)
            .with_doc("Determines whether an object exists in another object's prototype chain.")
            .with_param("v", "Another object whose prototype chain is to be checked."),
        Binding::returning("propertyIsEnumerable", ValueId::ANY_BOOLEAN)
            .with_doc("Determines whether a specified property is enumerable.")
            .with_param("v", "A property name."),
        Binding::returning("toLocaleString", ValueId::ANY_STRING)
            .with_doc("Returns a string representation of an object using the current locale."),
        Binding::returning("toString", ValueId::ANY_STRING)
            .with_doc("Returns a string representation of an object."),
        Binding::stub("valueOf")
            .with_doc("Returns the primitive value of the specified object."),
    ]
}

fn object_function(builder: &mut NamespaceBuilder<'_>, common: &Common) -> ValueId {
    let store = builder.store();
    builder.function(Binding::stub("Object").with_members([
        Binding::member("prototype", store.object_value(common.object_prototype)),
        Binding::stub("getPrototypeOf").with_doc("Returns the prototype of an object."),
        Binding::stub("getOwnPropertyDescriptor")
            .with_doc("Gets the own property descriptor of the specified object.\nAn own property descriptor is one that is defined directly on the object and is not inherited from the object's prototype.")
            .with_param("o", "Object that contains the property.")
            .with_param("p", "Name of the property."),
        Binding::stub("getOwnPropertyNames")
            .with_doc("Returns the names of the own properties of an object. The own properties of an object are those that are defined directly\non that object, and are not inherited from the object's prototype. The properties of an object include both fields (objects) and functions.")
            .with_param("o", "Object that contains the own properties."),
        Binding::stub("create")
            .with_doc("Creates an object that has the specified prototype, and that optionally contains specified properties.")
            .with_param("o", "Object to use as a prototype. May be null")
            .with_param("properties", "JavaScript object that contains one or more property descriptors."),
        Binding::specialized("defineProperty", specialized::define_property)
            .with_doc("Adds a property to an object, or modifies attributes of an existing property.")
            .with_param("o", "Object on which to add or modify the property. This can be a native JavaScript object (that is, a user-defined object or a built in object) or a DOM object.")
            .with_param("p", "The property name.")
            .with_param("attributes", "Descriptor for the property. It can be for a data property or an accessor property."),
        Binding::specialized("defineProperties", specialized::define_properties)
            .with_doc("Adds one or more properties to an object, and/or modifies attributes of existing properties.")
            .with_param("o", "Object on which to add or modify the properties. This can be a native JavaScript object or a DOM object.")
            .with_param("properties", "JavaScript object that contains one or more descriptor objects. Each descriptor object describes a data property or an accessor property."),
        Binding::stub("seal")
            .with_doc("Prevents the modification of attributes of existing properties, and prevents the addition of new properties.")
            .with_param("o", "Object on which to lock the attributes."),
        Binding::stub("freeze")
            .with_doc("Prevents the modification of existing property attributes and values, and prevents the addition of new properties.")
            .with_param("o", "Object on which to lock the attributes."),
        Binding::stub("preventExtensions")
            .with_doc("Prevents the addition of new properties to an object.")
            .with_param("o", "Object to make non-extensible."),
        Binding::returning("isSealed", common.boolean)
            .with_doc("Returns true if existing property attributes cannot be modified in an object and new properties cannot be added to the object.")
            .with_param("o", "Object to test."),
        Binding::returning("isFrozen", common.boolean)
            .with_doc("Returns true if existing property attributes and values cannot be modified in an object, and new properties cannot be added to the object.")
            .with_param("o", "Object to test."),
        Binding::returning("isExtensible", common.boolean)
            .with_doc("Returns a value that indicates whether new properties can be added to an object.")
            .with_param("o", "Object to test."),
        Binding::stub("keys")
            .with_doc("Returns the names of the enumerable properties and methods of an object.")
            .with_param("o", "Object that contains the properties and methods. This can be an object that you created or an existing Document Object Model (DOM) object."),
        Binding::stub("is"),
    ]))
}

// =============================================================================
// Array, Boolean, Number, String
// =============================================================================

fn array_function(builder: &mut NamespaceBuilder<'_>, common: &Common) -> ObjectId {
    let prototype = builder.object(
        Some(common.object_prototype),
        [
            Binding::stub("concat"),
            Binding::stub("constructor"),
            Binding::stub("every"),
            Binding::stub("filter"),
            Binding::specialized("forEach", specialized::array_for_each)
                .with_doc("Performs the specified action for each element in an array.")
                .with_param("callbackfn", "A function that accepts up to three arguments. forEach calls the callbackfn function one time for each element in the array.")
                .with_optional_param("thisArg", "An object to which the this keyword can refer in the callbackfn function."),
            Binding::stub("indexOf"),
            Binding::stub("join"),
            Binding::stub("lastIndexOf"),
            Binding::stub("length"),
            Binding::stub("map"),
            Binding::stub("pop"),
            Binding::stub("push"),
            Binding::stub("reduce"),
            Binding::stub("reduceRight"),
            Binding::stub("reverse"),
            Binding::stub("shift"),
            Binding::stub("slice"),
            Binding::stub("some"),
            Binding::stub("sort"),
            Binding::stub("splice"),
            Binding::stub("toLocaleString"),
            Binding::returning("toString", common.string),
            Binding::stub("unshift"),
        ],
    );
    let store = builder.store();
    builder.function_object(Binding::stub("Array").with_members([
        Binding::member("prototype", store.object_value(prototype)),
        Binding::returning("isArray", ValueId::ANY_BOOLEAN),
    ]))
}

fn boolean_function(builder: &mut NamespaceBuilder<'_>, common: &Common) -> (ValueId, ObjectId) {
    let prototype = builder.object(
        Some(common.object_prototype),
        [
            Binding::stub("constructor"),
            Binding::returning("toString", common.string),
            Binding::stub("valueOf"),
        ],
    );
    let store = builder.store();
    let function = builder.function(
        Binding::stub("Boolean")
            .with_members([Binding::member("prototype", store.object_value(prototype))]),
    );
    (function, prototype)
}

fn number_function(builder: &mut NamespaceBuilder<'_>, common: &Common) -> (ValueId, ObjectId) {
    let prototype = builder.object(
        Some(common.object_prototype),
        [
            Binding::stub("constructor"),
            Binding::returning("toExponential", common.string)
                .with_doc("Returns a string containing a number represented in exponential notation."),
            Binding::returning("toFixed", common.string)
                .with_doc("Returns a string representing a number in fixed-point notation."),
            Binding::stub("toLocaleString"),
            Binding::stub("toPrecision")
                .with_doc("Returns a string containing a number represented either in exponential or fixed-point notation with a specified number of digits.")
                .with_optional_param("precision", "Number of significant digits. Must be in the range 1 - 21, inclusive."),
            Binding::returning("toString", common.string)
                .with_doc("Returns a string representation of an object.")
                .with_optional_param("radix", "Specifies a radix for converting numeric values to strings. This value is only used for numbers."),
            Binding::stub("valueOf"),
        ],
    );
    let store = builder.store();
    let function = builder.function(Binding::stub("Number").with_members([
        Binding::member("prototype", store.object_value(prototype)),
        Binding::member("length", store.number(1.0)),
        Binding::member("name", store.string("Number")),
        Binding::member("arguments", ValueId::NULL),
        Binding::member("caller", ValueId::NULL),
        Binding::member("MAX_VALUE", store.number(f64::MAX)),
        Binding::member("MIN_VALUE", store.number(5e-324)),
        Binding::member("NaN", store.number(f64::NAN)),
        Binding::member("NEGATIVE_INFINITY", store.number(f64::NEG_INFINITY)),
        Binding::member("POSITIVE_INFINITY", store.number(f64::INFINITY)),
        Binding::returning("isFinite", ValueId::ANY_BOOLEAN)
            .with_doc("Determines whether a supplied number is finite."),
        Binding::returning("isNaN", ValueId::ANY_BOOLEAN).with_doc(
            "Returns a Boolean value that indicates whether a value is the reserved value NaN (not a number).",
        ),
    ]));
    (function, prototype)
}

fn string_function(builder: &mut NamespaceBuilder<'_>, common: &Common) -> (ValueId, ObjectId) {
    let s = common.string;
    let tag = |name: &str, element: &str| {
        Binding::returning(name, s)
            .with_doc(&format!("Surrounds the provided string with {element} tag."))
    };
    let prototype = builder.object(
        Some(common.object_prototype),
        [
            tag("anchor", "an <a name=...>").with_param("name", "the name attribute for the anchor"),
            tag("big", "a <big>"),
            tag("blink", "a <blink>"),
            tag("bold", "a <bold>"),
            Binding::returning("charAt", s)
                .with_doc("Returns the character at the specified index.")
                .with_param("pos", "The zero-based index of the desired character."),
            Binding::returning("charCodeAt", common.number)
                .with_doc("Returns the Unicode value of the character at the specified location.")
                .with_param("index", "The zero-based index of the desired character. If there is no character at the specified index, NaN is returned."),
            Binding::stub("concat")
                .with_doc("Returns a string that contains the concatenation of two or more strings.")
                .with_param("...", ""),
            Binding::stub("constructor"),
            tag("fixed", "a <tt>"),
            tag("fontcolor", "a <font color=...>").with_param("color", "the color attribute for the font tag"),
            tag("fontsize", "a <font size=...>").with_param("size", "the size attribute for the font tag"),
            Binding::stub("indexOf")
                .with_doc("Returns the position of the first occurrence of a substring.")
                .with_param("searchString", "The substring to search for in the string")
                .with_optional_param("position", "The index at which to begin searching the String object. If omitted, search starts at the beginning of the string."),
            tag("italics", "an <i>"),
            Binding::stub("lastIndexOf")
                .with_doc("Returns the last occurrence of a substring in the string.")
                .with_param("searchString", "The substring to search for.")
                .with_optional_param("position", "The index at which to begin searching. If omitted, the search begins at the end of the string."),
            Binding::property("length", common.number),
            tag("link", "an <a href=...>").with_param("href", "the href attribute for the tag"),
            Binding::stub("localeCompare")
                .with_doc("Determines whether two strings are equivalent in the current locale.")
                .with_param("that", "String to compare to target string"),
            Binding::stub("match")
                .with_doc("Matches a string with a regular expression, and returns an array containing the results of that search.")
                .with_param("regexp", "A string containing the regular expression pattern and flags or a RegExp."),
            Binding::stub("replace")
                .with_doc("Replaces text in a string, using a regular expression or search string.")
                .with_param("searchValue", "A string that represents the regular expression or a RegExp")
                .with_param("replaceValue", "A string containing the text replacement text or a function which returns it."),
            Binding::stub("search")
                .with_doc("Finds the first substring match in a regular expression search.")
                .with_param("regexp", "The regular expression pattern and applicable flags."),
            Binding::stub("slice")
                .with_doc("Returns a section of a string.")
                .with_param("start", "The index to the beginning of the specified portion of stringObj.")
                .with_param("end", "The index to the end of the specified portion of stringObj. The substring includes the characters up to, but not including, the character indicated by end. If this value is not specified, the substring continues to the end of stringObj."),
            tag("small", "a <small>"),
            Binding::stub("split")
                .with_doc("Split a string into substrings using the specified separator and return them as an array.")
                .with_param("separator", "A string that identifies character or characters to use in separating the string. If omitted, a single-element array containing the entire string is returned.")
                .with_optional_param("limit", "A value used to limit the number of elements returned in the array."),
            tag("strike", "a <strike>"),
            tag("sub", "a <sub>"),
            Binding::stub("substr"),
            Binding::stub("substring")
                .with_doc("Returns the substring at the specified location within a String object.")
                .with_param("start", "The zero-based index number indicating the beginning of the substring.")
                .with_param("end", "Zero-based index number indicating the end of the substring. The substring includes the characters up to, but not including, the character indicated by end. If end is omitted, the characters from start through the end of the original string are returned."),
            tag("sup", "a <sup>"),
            Binding::stub("toLocaleLowerCase").with_doc("Converts all alphabetic characters to lowercase, taking into account the host environment's current locale."),
            Binding::stub("toLocaleUpperCase").with_doc("Returns a string where all alphabetic characters have been converted to uppercase, taking into account the host environment's current locale."),
            Binding::stub("toLowerCase").with_doc("Converts all the alphabetic characters in a string to lowercase."),
            Binding::stub("toString").with_doc("Returns a string representation of a string."),
            Binding::stub("toUpperCase").with_doc("Converts all the alphabetic characters in a string to uppercase."),
            Binding::stub("trim").with_doc("Removes the leading and trailing white space and line terminator characters from a string."),
            Binding::stub("trimLeft").with_doc("Removes the leading white space and line terminator characters from a string."),
            Binding::stub("trimRight").with_doc("Removes the trailing white space and line terminator characters from a string."),
            Binding::stub("valueOf"),
        ],
    );
    let store = builder.store();
    let function = builder.function(Binding::stub("String").with_members([
        Binding::member("prototype", store.object_value(prototype)),
        Binding::returning("fromCharCode", s),
    ]));
    (function, prototype)
}

// =============================================================================
// Date, RegExp, errors
// =============================================================================

fn date_function(builder: &mut NamespaceBuilder<'_>, common: &Common) -> ValueId {
    let n = common.number;
    let s = common.string;
    let getter = |name: &str, doc: &str| Binding::returning(name, n).with_doc(doc);
    let prototype = builder.object(
        Some(common.object_prototype),
        [
            Binding::stub("constructor"),
            getter("getDate", "Gets the day-of-the-month, using local time."),
            getter("getDay", "Gets the day of the week, using local time."),
            getter("getFullYear", "Gets the year, using local time."),
            getter("getHours", "Gets the hours in a date, using local time."),
            getter("getMilliseconds", "Gets the milliseconds of a Date, using local time."),
            getter("getMinutes", "Gets the minutes of a Date object, using local time."),
            getter("getMonth", "Gets the month, using local time."),
            getter("getSeconds", "Gets the seconds of a Date object, using local time."),
            getter("getTime", "Gets the time value in milliseconds."),
            getter("getTimezoneOffset", "Gets the difference in minutes between the time on the local computer and Universal Coordinated Time (UTC)."),
            getter("getUTCDate", "Gets the day-of-the-month, using Universal Coordinated Time (UTC)."),
            getter("getUTCDay", "Gets the day of the week using Universal Coordinated Time (UTC)."),
            getter("getUTCHours", "Gets the hours value in a Date object using Universal Coordinated Time (UTC)."),
            getter("getUTCMilliseconds", "Gets the milliseconds of a Date object using Universal Coordinated Time (UTC)."),
            getter("getUTCMinutes", "Gets the minutes of a Date object using Universal Coordinated Time (UTC)."),
            getter("getUTCMonth", "Gets the month of a Date object using Universal Coordinated Time (UTC)."),
            getter("getUTCSeconds", "Gets the seconds of a Date object using Universal Coordinated Time (UTC)."),
            getter("getYear", "Gets the year minus 2000, using local time."),
            Binding::returning("setDate", n)
                .with_doc("Sets the numeric day-of-the-month value of the Date object using local time.")
                .with_param("date", "A numeric value equal to the day of the month."),
            Binding::stub("setFullYear")
                .with_doc("Sets the year of the Date object using local time.")
                .with_param("year", "A numeric value for the year.")
                .with_optional_param("month", "A zero-based numeric value for the month (0 for January, 11 for December). Must be specified if numDate is specified.")
                .with_optional_param("date", "A numeric value equal for the day of the month."),
            Binding::stub("setHours")
                .with_doc("Sets the hour value in the Date object using local time.")
                .with_param("hours", "A numeric value equal to the hours value.")
                .with_optional_param("min", "A numeric value equal to the minutes value.")
                .with_optional_param("sec", "A numeric value equal to the seconds value.")
                .with_optional_param("ms", "A numeric value equal to the milliseconds value."),
            Binding::returning("setMilliseconds", n)
                .with_doc("Sets the milliseconds value in the Date object using local time.")
                .with_param("ms", "A numeric value equal to the millisecond value."),
            Binding::returning("setMinutes", n)
                .with_doc("Sets the minutes value in the Date object using local time.")
                .with_param("min", "A numeric value equal to the minutes value.")
                .with_optional_param("sec", "A numeric value equal to the seconds value.")
                .with_optional_param("ms", "A numeric value equal to the milliseconds value."),
            Binding::returning("setMonth", n)
                .with_doc("Sets the month value in the Date object using local time.")
                .with_param("month", "A numeric value equal to the month. The value for January is 0, and other month values follow consecutively.")
                .with_optional_param("date", "A numeric value representing the day of the month. If this value is not supplied, the value from a call to the getDate method is used."),
            Binding::returning("setSeconds", n)
                .with_doc("Sets the seconds value in the Date object using local time.")
                .with_param("sec", "A numeric value equal to the seconds value.")
                .with_optional_param("ms", "A numeric value equal to the milliseconds value."),
            Binding::returning("setTime", n)
                .with_doc("Sets the date and time value in the Date object.")
                .with_param("time", "A numeric value representing the number of elapsed milliseconds since midnight, January 1, 1970 GMT."),
            Binding::returning("setUTCDate", n)
                .with_doc("Sets the numeric day of the month in the Date object using Universal Coordinated Time (UTC).")
                .with_param("date", "A numeric value equal to the day of the month."),
            Binding::returning("setUTCFullYear", n)
                .with_doc("Sets the year value in the Date object using Universal Coordinated Time (UTC).")
                .with_param("year", "A numeric value equal to the year.")
                .with_optional_param("month", "A numeric value equal to the month. The value for January is 0, and other month values follow consecutively. Must be supplied if numDate is supplied.")
                .with_optional_param("date", "A numeric value equal to the day of the month."),
            Binding::returning("setUTCHours", n)
                .with_doc("Sets the hours value in the Date object using Universal Coordinated Time (UTC).")
                .with_param("hours", "A numeric value equal to the hours value.")
                .with_optional_param("min", "A numeric value equal to the minutes value.")
                .with_optional_param("sec", "A numeric value equal to the seconds value.")
                .with_optional_param("ms", "A numeric value equal to the milliseconds value."),
            Binding::returning("setYear", n),
            Binding::returning("toDateString", s).with_doc("Returns a date as a string value."),
            Binding::stub("toGMTString"),
            Binding::returning("toISOString", s).with_doc("Returns a date as a string value in ISO format."),
            Binding::returning("toJSON", s).with_doc("Used by the JSON.stringify method to enable the transformation of an object's data for JavaScript Object Notation (JSON) serialization."),
            Binding::returning("toLocaleDateString", s).with_doc("Returns a date as a string value appropriate to the host environment's current locale."),
            Binding::returning("toLocaleString", s).with_doc("Returns a value as a string value appropriate to the host environment's current locale."),
            Binding::returning("toLocaleTimeString", s).with_doc("Returns a time as a string value appropriate to the host environment's current locale."),
            Binding::returning("toString", s).with_doc("Returns a string representation of a date. The format of the string depends on the locale."),
            Binding::returning("toTimeString", s).with_doc("Returns a time as a string value."),
            Binding::stub("toUTCString"),
            Binding::stub("valueOf"),
        ],
    );
    let store = builder.store();
    builder.function(
        Binding::stub("Date")
            .with_members([Binding::member("prototype", store.object_value(prototype))]),
    )
}

fn regexp_function(builder: &mut NamespaceBuilder<'_>, common: &Common) -> ValueId {
    let prototype = builder.object(
        Some(common.object_prototype),
        [
            Binding::stub("compile"),
            Binding::stub("constructor"),
            Binding::stub("exec")
                .with_doc("Executes a search on a string using a regular expression pattern, and returns an array containing the results of that search.")
                .with_param("string", "The String object or string literal on which to perform the search."),
            Binding::property("global", ValueId::ANY_BOOLEAN),
            Binding::property("ignoreCase", ValueId::ANY_BOOLEAN),
            Binding::property("lastIndex", common.number),
            Binding::property("multiline", ValueId::ANY_BOOLEAN),
            Binding::property("source", common.string),
            Binding::returning("test", ValueId::ANY_BOOLEAN)
                .with_doc("Returns a Boolean value that indicates whether or not a pattern exists in a searched string.")
                .with_param("string", "String on which to perform the search."),
            Binding::returning("toString", common.string),
        ],
    );
    let store = builder.store();
    builder.function(Binding::stub("RegExp").with_members([
        Binding::member("prototype", store.object_value(prototype)),
        Binding::property("multiline", ValueId::ANY_BOOLEAN),
        Binding::stub("arguments"),
        Binding::stub("caller"),
        Binding::stub("input"),
        Binding::stub("lastMatch"),
        Binding::stub("lastParen"),
        Binding::stub("leftContext"),
        Binding::stub("length"),
        // Listed after the `multiline` property above, so this one wins.
        Binding::stub("multiline"),
        Binding::stub("name"),
        Binding::stub("rightContext"),
    ]))
}

fn error_function(builder: &mut NamespaceBuilder<'_>, common: &Common) -> ValueId {
    let prototype = builder.object(
        Some(common.object_prototype),
        [
            Binding::stub("constructor"),
            Binding::property("message", common.string),
            Binding::property("name", common.string),
            Binding::returning("toString", common.string),
        ],
    );
    let store = builder.store();
    builder.function(Binding::stub("Error").with_members([
        Binding::member("prototype", store.object_value(prototype)),
        Binding::stub("captureStackTrace"),
        Binding::member("stackTraceLimit", store.number(10.0)),
    ]))
}

fn named_error_function(builder: &mut NamespaceBuilder<'_>, common: &Common, name: &str) -> ValueId {
    let prototype = builder.object(
        Some(common.object_prototype),
        [
            Binding::stub("arguments"),
            Binding::stub("constructor"),
            Binding::property("name", common.string),
            Binding::stub("stack"),
            Binding::stub("type"),
        ],
    );
    let store = builder.store();
    builder.function(
        Binding::stub(name)
            .with_members([Binding::member("prototype", store.object_value(prototype))]),
    )
}

// =============================================================================
// JSON and Math
// =============================================================================

fn json_object(builder: &mut NamespaceBuilder<'_>, common: &Common) -> ValueId {
    let store = builder.store();
    let parse_result = store.new_object(Some(common.object_prototype));
    let json = builder.object(
        Some(common.object_prototype),
        [
            Binding::returning("parse", parse_result)
                .with_doc("Converts a JavaScript Object Notation (JSON) string into an object.")
                .with_param("text", "A valid JSON string.")
                .with_optional_param("reviver", "A function that transforms the results. This function is called for each member of the object.\nIf a member contains nested objects, the nested objects are transformed before the parent object is."),
            Binding::returning("stringify", common.string)
                .with_doc("Converts a JavaScript value to a JavaScript Object Notation (JSON) string.")
                .with_param("value", "A JavaScript value, usually an object or array, to be converted."),
        ],
    );
    store.object_value(json)
}

fn math_object(builder: &mut NamespaceBuilder<'_>, common: &Common) -> ValueId {
    let store = builder.store();
    let n = common.number;
    let unary = |name: &str, doc: &str| {
        Binding::returning(name, n)
            .with_doc(doc)
            .with_param("x", "A numeric expression.")
    };
    let math = builder.object(
        Some(common.object_prototype),
        [
            Binding::member("E", store.number(consts::E)),
            Binding::member("LN10", store.number(consts::LN_10)),
            Binding::member("LN2", store.number(consts::LN_2)),
            Binding::member("LOG2E", store.number(consts::LOG2_E)),
            Binding::member("LOG10E", store.number(consts::LOG10_E)),
            Binding::member("PI", store.number(consts::PI)),
            Binding::member("SQRT1_2", store.number(consts::FRAC_1_SQRT_2)),
            Binding::member("SQRT2", store.number(consts::SQRT_2)),
            Binding::returning("random", n).with_doc("Returns a pseudorandom number between 0 and 1."),
            Binding::returning("abs", n)
                .with_doc("Returns the absolute value of a number (the value without regard to whether it is positive or negative).\nFor example, the absolute value of -5 is the same as the absolute value of 5.")
                .with_param("x", "A numeric expression for which the absolute value is needed."),
            unary("acos", "Returns the arc cosine (or inverse cosine) of a number."),
            unary("asin", "Returns the arcsine of a number."),
            unary("atan", "Returns the arctangent of a number."),
            unary("ceil", "Returns the smallest number greater than or equal to its numeric argument."),
            unary("cos", "Returns the cosine of a number."),
            unary("exp", "Returns e (the base of natural logarithms) raised to a power."),
            unary("floor", "Returns the greatest number less than or equal to its numeric argument."),
            unary("log", "Returns the natural logarithm (base e) of a number."),
            unary("round", "Returns a supplied numeric expression rounded to the nearest number."),
            unary("sin", "Returns the sine of a number."),
            unary("sqrt", "Returns the square root of a number."),
            unary("tan", "Returns the tangent of a number."),
            Binding::returning("atan2", n)
                .with_doc("Returns the angle (in radians) from the X axis to a point.")
                .with_param("y", "A numeric expression representing the cartesian y-coordinate.")
                .with_param("x", "A numeric expression representing the cartesian x-coordinate."),
            Binding::returning("pow", n)
                .with_doc("Returns the value of a base expression taken to a specified power.")
                .with_param("x", "The base value of the expression.")
                .with_param("y", "The exponent value of the expression."),
            Binding::returning("max", n)
                .with_doc("Returns the larger of a set of supplied numeric expressions.")
                .with_param("x", "Numeric expressions to be evaluated.")
                .with_param("y...", "Numeric expressions to be evaluated."),
            Binding::returning("min", n)
                .with_doc("Returns the smaller of a set of supplied numeric expressions.")
                .with_param("x", "Numeric expressions to be evaluated.")
                .with_param("y...", "Numeric expressions to be evaluated."),
        ],
    );
    store.object_value(math)
}

// =============================================================================
// Global functions
// =============================================================================

fn global_functions(common: &Common) -> Vec<Binding> {
    let s = common.string;
    vec![
        Binding::returning("decodeURI", s)
            .with_doc("Gets the unencoded version of an encoded Uniform Resource Identifier (URI).")
            .with_param("encodedURI", "A value representing an encoded URI."),
        Binding::returning("decodeURIComponent", s)
            .with_doc("Gets the unencoded version of an encoded component of a Uniform Resource Identifier (URI).")
            .with_param("encodedURIComponent", "A value representing an encoded URI component."),
        Binding::returning("encodeURI", s)
            .with_doc("Encodes a text string as a valid Uniform Resource Identifier (URI)")
            .with_param("uri", "A value representing an encoded URI."),
        Binding::returning("encodeURIComponent", s)
            .with_doc("Encodes a text string as a valid component of a Uniform Resource Identifier (URI).")
            .with_param("uriComponent", "A value representing an encoded URI component."),
        Binding::returning("escape", s),
        Binding::stub("eval")
            .with_doc("Evaluates JavaScript code and executes it.")
            .with_param("x", "A String value that contains valid JavaScript code."),
        Binding::returning("isFinite", common.boolean)
            .with_doc("Determines whether a supplied number is finite.")
            .with_param("number", "Any numeric value."),
        Binding::returning("isNaN", common.boolean)
            .with_doc("Returns a Boolean value that indicates whether a value is the reserved value NaN (not a number).")
            .with_param("number", "A numeric value."),
        Binding::returning("parseFloat", common.number)
            .with_doc("Converts a string to a floating-point number.")
            .with_param("string", "A string that contains a floating-point number."),
        Binding::returning("parseInt", common.number)
            .with_doc("Converts A string to an integer.")
            .with_param("s", "A string to convert into a number.")
            .with_optional_param("radix", "A value between 2 and 36 that specifies the base of the number in numString.\nIf this argument is not supplied, strings with a prefix of '0x' are considered hexadecimal.\nAll other strings are considered decimal."),
        Binding::returning("unescape", s),
    ]
}

fn require_binding(options: &BuiltinOptions) -> Binding {
    let binding = if options.node_require {
        Binding::specialized("require", specialized::require)
    } else {
        Binding::stub("require")
    };
    binding
        .with_doc("Loads a module and returns its exports.")
        .with_param("id", "The module name or path.")
}

#[cfg(test)]
#[path = "../tests/catalogue_tests.rs"]
mod tests;
