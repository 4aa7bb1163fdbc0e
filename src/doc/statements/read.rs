/*!
# `read <item> <variable>`
Abbreviation `re`.
## Purpose
Reads a system value into a variable.

## Remarks
Item 0 is the 8 ms tick counter last cleared by `wait`.
Other items read as 0.

## Example
```text
read 0 t
```

*/
