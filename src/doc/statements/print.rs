/*!
# `print [<string> | <expression> | ,]...`
Abbreviation `pr`.
## Purpose
Sends text and numbers to the PC link.

## Remarks
Strings are sent as they are, up to 40 characters. Expressions are
sent in decimal with no padding. A comma sends a single space.
A newline always ends the output.

## Example
```text
a = 7;
print 'a is', a
a is 7
```

*/
