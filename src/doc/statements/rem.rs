/*!
# `rem <anything>`
Also written `#`.
## Purpose
A remark. Everything up to the end of the statement is ignored.

## Remarks
`rem` ends at the next `;`. A `#` outside a string starts a comment
that is removed when the program is downloaded, so it never takes up
program memory.

## Example
```text
rem turn left; motors 0 1
```

*/
